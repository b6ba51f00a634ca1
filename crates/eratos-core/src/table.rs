//! Candidate table: one primality flag per integer below the bound.

/// Boolean-per-integer table indexed `0..len`.
///
/// After [`CandidateTable::sieve`] returns, `flags[i]` is `true` if and only
/// if `i` is prime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTable {
    flags: Vec<bool>,
}

impl CandidateTable {
    /// Build the table for `len` and run the elimination pass.
    pub fn sieve(len: usize) -> Self {
        let mut table = Self::fresh(len);
        table.eliminate();
        table
    }

    /// All flags `true`, then `0` and `1` cleared and `2` asserted, where those
    /// indices exist.
    fn fresh(len: usize) -> Self {
        let mut flags = vec![true; len];
        flags.iter_mut().take(2).for_each(|flag| *flag = false);
        if let Some(two) = flags.get_mut(2) {
            *two = true;
        }
        Self { flags }
    }

    fn eliminate(&mut self) {
        let len = self.flags.len();
        let mut i = 2usize;
        while i.checked_mul(i).is_some_and(|square| square < len) {
            if self.flags[i] {
                for multiple in (i * i..len).step_by(i) {
                    self.flags[multiple] = false;
                }
            }
            i += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Out-of-range values are reported as not prime.
    pub fn is_prime(&self, n: usize) -> bool {
        self.flags.get(n).copied().unwrap_or(false)
    }

    /// Number of primes below `len`.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    /// Primes in ascending order.
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(n, &flag)| flag.then_some(n))
    }

    pub fn into_primes(self) -> Vec<usize> {
        self.primes().collect()
    }
}
