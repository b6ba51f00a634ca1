use anyhow::{Context, Result};
use eratos_core::{get_primes, Sieve, SieveError, SieveLimits};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bounds with known answers; checked on every tier.
pub const FIXED_VECTORS: &[(i64, &[u64])] = &[
    (0, &[]),
    (1, &[]),
    (2, &[]),
    (3, &[2]),
    (10, &[2, 3, 5, 7]),
    (30, &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]),
];

/// Compare the sieve against trial division on `iterations` random bounds up to
/// `max_bound` (inclusive), checking ordering, membership and idempotence.
pub fn check_invariants(
    iterations: usize,
    max_bound: u64,
    limits: SieveLimits,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let sieve = Sieve::new(limits);
    let upper = max_bound.min(limits.max_bound).min(i64::MAX as u64) as i64;

    tracing::info!(iterations, upper, "running differential checks");

    for i in 0..iterations {
        let max = rng.gen_range(0..=upper);
        let primes = sieve
            .primes(max)
            .with_context(|| format!("Iteration {}: sieve failed for max={}", i, max))?;

        if let Some(w) = primes.windows(2).find(|w| w[0] >= w[1]) {
            anyhow::bail!(
                "Invariant Broken: result not strictly ascending ({} then {}).\n\
                 Iteration: {}, max: {}, Seed: {:?}",
                w[0],
                w[1],
                i,
                max,
                seed
            );
        }

        let mut listed = primes.iter().copied().peekable();
        for v in 0..max as u64 {
            let in_result = listed.next_if_eq(&v).is_some();
            if in_result != is_prime_by_trial_division(v) {
                anyhow::bail!(
                    "Invariant Broken: membership mismatch for {} (listed: {}).\n\
                     Iteration: {}, max: {}, Seed: {:?}",
                    v,
                    in_result,
                    i,
                    max,
                    seed
                );
            }
        }
        if let Some(stray) = listed.next() {
            anyhow::bail!(
                "Invariant Broken: {} listed but not below max={} (Seed: {:?})",
                stray,
                max,
                seed
            );
        }

        if sieve.primes(max)? != primes {
            anyhow::bail!(
                "Invariant Broken: repeated call for max={} differs (Seed: {:?})",
                max,
                seed
            );
        }
    }

    tracing::info!(iterations, "differential checks passed");
    Ok(())
}

/// Assert the literal vectors in [`FIXED_VECTORS`].
pub fn check_fixed_vectors() -> Result<()> {
    for &(max, expected) in FIXED_VECTORS {
        let got = get_primes(max).with_context(|| format!("get_primes({}) failed", max))?;
        if got != expected {
            anyhow::bail!(
                "Vector mismatch for max={}: expected {:?}, got {:?}",
                max,
                expected,
                got
            );
        }
    }
    Ok(())
}

/// Malformed or oversized bounds must be refused up front.
pub fn check_rejections(limits: SieveLimits) -> Result<()> {
    let sieve = Sieve::new(limits);

    for max in [-1_i64, -1_000, i64::MIN] {
        match sieve.primes(max) {
            Err(SieveError::InvalidArgument { .. }) => {}
            other => anyhow::bail!("max={} should be InvalidArgument, got {:?}", max, other),
        }
    }

    if let Some(over) = limits.max_bound.checked_add(1) {
        if let Ok(over) = i64::try_from(over) {
            match sieve.primes(over) {
                Err(SieveError::BoundExceedsLimit { requested, limit })
                    if requested == over as u64 && limit == limits.max_bound => {}
                other => anyhow::bail!(
                    "max={} should exceed limit {}, got {:?}",
                    over,
                    limits.max_bound,
                    other
                ),
            }
        }
    }

    for text in ["abc", "1.5", "-3", ""] {
        if eratos_core::parse_bound(text).is_ok() {
            anyhow::bail!("parse_bound({:?}) should be rejected", text);
        }
    }
    Ok(())
}

pub fn is_prime_by_trial_division(v: u64) -> bool {
    if v < 2 {
        return false;
    }
    let mut d = 2u64;
    while d * d <= v {
        if v % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}
