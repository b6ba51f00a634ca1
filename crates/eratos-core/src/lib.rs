//! Prime tables via the Sieve of Eratosthenes.
//!
//! The engine allocates a boolean-per-integer candidate table for each call,
//! strikes out composites, and returns the surviving indices in ascending
//! order. Bounds are exclusive: `get_primes(10)` yields `[2, 3, 5, 7]`.
//!
//! # Quick Start
//!
//! ```
//! use eratos_core::{Sieve, SieveLimits};
//!
//! # fn example() -> Result<(), eratos_core::SieveError> {
//! let primes = eratos_core::get_primes(30)?;
//! assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//!
//! // Cap table size for untrusted bounds.
//! let sieve = Sieve::new(SieveLimits { max_bound: 1_000 });
//! assert!(sieve.primes(1_001).is_err());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Errors
//!
//! | Condition | Error |
//! |-----------|-------|
//! | negative or non-integer bound | `SieveError::InvalidArgument` |
//! | bound above `SieveLimits::max_bound` | `SieveError::BoundExceedsLimit` |

pub mod error;
pub mod limits;
pub mod sieve;
pub mod table;

pub use error::{SieveError, SieveResult};
pub use limits::{SieveLimits, SieveLimitsOverrides, DEFAULT_MAX_BOUND};
pub use sieve::{get_primes, parse_bound, primes_below, Sieve};
pub use table::CandidateTable;
