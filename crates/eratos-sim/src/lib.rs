pub mod differential;
pub mod report;
pub mod suite;

pub use report::{CheckResult, CheckStatus, SimReport};
pub use suite::{run_suite, tier_differential_size, SuiteConfig, SuiteTier, TimeBudget};
