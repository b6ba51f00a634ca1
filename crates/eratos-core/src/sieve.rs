use crate::error::{SieveError, SieveResult};
use crate::limits::SieveLimits;
use crate::table::CandidateTable;

/// Sieve of Eratosthenes engine.
///
/// Holds only its limits; every call allocates its own candidate table, so a
/// single `Sieve` can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sieve {
    limits: SieveLimits,
}

impl Sieve {
    pub fn new(limits: SieveLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> SieveLimits {
        self.limits
    }

    /// All primes strictly below `max`, ascending.
    pub fn primes(&self, max: i64) -> SieveResult<Vec<u64>> {
        let table = self.table(max)?;
        let primes: Vec<u64> = table.primes().map(|p| p as u64).collect();
        tracing::debug!(max, count = primes.len(), "sieve complete");
        Ok(primes)
    }

    /// Finished candidate table for `max`, for callers that want to query it.
    pub fn table(&self, max: i64) -> SieveResult<CandidateTable> {
        let len = self.checked_len(max)?;
        tracing::debug!(
            max,
            table_bytes = SieveLimits::table_bytes(len as u64),
            "allocating candidate table"
        );
        Ok(CandidateTable::sieve(len))
    }

    fn checked_len(&self, max: i64) -> SieveResult<usize> {
        let requested = u64::try_from(max).map_err(|_| {
            SieveError::invalid_argument(format!("bound must be non-negative, got {}", max))
        })?;

        let limit = self.limits.max_bound;
        if requested > limit {
            tracing::warn!(requested, limit, "sieve bound rejected by limit");
            return Err(SieveError::BoundExceedsLimit { requested, limit });
        }

        usize::try_from(requested).map_err(|_| SieveError::BoundExceedsLimit {
            requested,
            limit: usize::MAX as u64,
        })
    }
}

/// All primes strictly below `max`, using default limits.
///
/// ```
/// assert_eq!(eratos_core::get_primes(10).unwrap(), vec![2, 3, 5, 7]);
/// assert!(eratos_core::get_primes(-1).is_err());
/// ```
pub fn get_primes(max: i64) -> SieveResult<Vec<u64>> {
    Sieve::default().primes(max)
}

/// Infallible form for bounds that are already unsigned. No limit applies
/// beyond available memory.
pub fn primes_below(max: usize) -> Vec<usize> {
    CandidateTable::sieve(max).into_primes()
}

/// Parse a textual bound. Surrounding whitespace is ignored; anything other
/// than a non-negative decimal integer is an `InvalidArgument`.
pub fn parse_bound(input: &str) -> SieveResult<u64> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(value) if value < 0 => Err(SieveError::invalid_argument(format!(
            "bound must be non-negative, got {}",
            value
        ))),
        Ok(value) => Ok(value as u64),
        Err(_) => trimmed.parse::<u64>().map_err(|err| {
            SieveError::invalid_argument(format!(
                "expected a non-negative integer bound, got {:?}: {}",
                input, err
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(get_primes(0).unwrap(), Vec::<u64>::new());
        assert_eq!(get_primes(1).unwrap(), Vec::<u64>::new());
        assert_eq!(get_primes(2).unwrap(), Vec::<u64>::new());
        assert_eq!(get_primes(3).unwrap(), vec![2]);
        assert_eq!(get_primes(10).unwrap(), vec![2, 3, 5, 7]);
        assert_eq!(
            get_primes(30).unwrap(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_negative_bound_rejected() {
        let err = get_primes(-1).unwrap_err();
        assert!(err.is_invalid_argument(), "got {:?}", err);
        assert!(get_primes(i64::MIN).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_limit_checked_before_allocation() {
        let sieve = Sieve::new(SieveLimits { max_bound: 100 });
        assert_eq!(sieve.primes(100).unwrap().len(), 25);
        assert_eq!(
            sieve.primes(101).unwrap_err(),
            SieveError::BoundExceedsLimit {
                requested: 101,
                limit: 100
            }
        );
        // Would be a multi-exabyte table if the guard ran after allocation.
        assert!(matches!(
            sieve.table(i64::MAX),
            Err(SieveError::BoundExceedsLimit { .. })
        ));
    }

    #[test]
    fn test_table_queries() {
        let table = Sieve::default().table(100).unwrap();
        assert_eq!(table.len(), 100);
        assert_eq!(table.count(), 25);
        assert!(table.is_prime(97));
        assert!(!table.is_prime(91));
    }

    #[test]
    fn test_primes_below_matches_get_primes() {
        let unsigned: Vec<u64> = primes_below(500).into_iter().map(|p| p as u64).collect();
        assert_eq!(unsigned, get_primes(500).unwrap());
    }

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound("30").unwrap(), 30);
        assert_eq!(parse_bound("  7\n").unwrap(), 7);
        assert_eq!(parse_bound("-0").unwrap(), 0);
        assert_eq!(parse_bound("18446744073709551615").unwrap(), u64::MAX);

        for bad in ["abc", "1.5", "-3", "", "1e3"] {
            let err = parse_bound(bad).unwrap_err();
            assert!(err.is_invalid_argument(), "{:?} -> {:?}", bad, err);
        }
    }
}
