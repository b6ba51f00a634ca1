use serde::Deserialize;

/// Largest bound accepted by default: a 4 GiB candidate table.
pub const DEFAULT_MAX_BOUND: u64 = 1_u64 << 32;

/// Resource limits for a sieve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SieveLimits {
    /// Largest accepted `max` (exclusive upper bound). The candidate table
    /// holds one byte per integer below this.
    pub max_bound: u64,
}

impl Default for SieveLimits {
    fn default() -> Self {
        Self {
            max_bound: DEFAULT_MAX_BOUND,
        }
    }
}

/// Partial overrides for `SieveLimits`, as read from an embedding application's config.
/// Unknown keys cause deserialization to fail (deny_unknown_fields).
/// Merge with `SieveLimits::default().apply(overrides)`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SieveLimitsOverrides {
    pub max_bound: Option<u64>,
}

impl SieveLimits {
    /// Apply overrides onto these limits. Only `Some` values override.
    pub fn apply(self, overrides: SieveLimitsOverrides) -> Self {
        Self {
            max_bound: overrides.max_bound.unwrap_or(self.max_bound),
        }
    }

    /// Candidate table size in bytes for a given bound.
    pub fn table_bytes(max: u64) -> u64 {
        max.saturating_mul(std::mem::size_of::<bool>() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_defaults_when_empty() {
        let limits = SieveLimits::default().apply(SieveLimitsOverrides::default());
        assert_eq!(limits, SieveLimits::default());
    }

    #[test]
    fn test_apply_overrides_max_bound() {
        let limits = SieveLimits::default().apply(SieveLimitsOverrides {
            max_bound: Some(1_000),
        });
        assert_eq!(limits.max_bound, 1_000);
    }

    #[test]
    fn test_table_bytes_saturates() {
        assert_eq!(SieveLimits::table_bytes(10), 10);
        assert_eq!(SieveLimits::table_bytes(u64::MAX), u64::MAX);
    }
}
