use crate::differential;
use crate::report::{CheckResult, CheckStatus, SimReport};
use anyhow::Result;
use eratos_core::SieveLimits;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteTier {
    Quick,
    Nightly,
}

#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub tier: SuiteTier,
    pub seed: u64,
    pub limits: Option<SieveLimits>,
    pub time_budget_secs: u64,
}

/// Differential sizing per tier: (iterations, largest random bound).
pub fn tier_differential_size(tier: SuiteTier) -> (usize, u64) {
    match tier {
        SuiteTier::Quick => (25, 2_000),
        SuiteTier::Nightly => (200, 50_000),
    }
}

/// Time budget for the whole suite.
///
/// If the elapsed time exceeds the budget between phases, the runner reports
/// `CheckStatus::Error` with "time budget exceeded" and stops.
#[derive(Debug, Clone)]
pub struct TimeBudget {
    start: Instant,
    limit: Duration,
}

impl TimeBudget {
    pub fn new(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    pub fn exceeded(&self) -> bool {
        self.start.elapsed() > self.limit
    }

    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.start.elapsed())
    }

    fn exceeded_result(&self, phase: &str) -> CheckResult {
        CheckResult {
            name: "time_budget".into(),
            status: CheckStatus::Error,
            message: Some(format!("time budget exceeded after {}", phase)),
            duration_ms: self.start.elapsed().as_millis() as u64,
        }
    }
}

pub fn run_suite(cfg: SuiteConfig) -> Result<SimReport> {
    let mut report = SimReport::new(&format!("{:?}", cfg.tier), cfg.seed);
    let budget = TimeBudget::new(Duration::from_secs(cfg.time_budget_secs));
    let limits = cfg.limits.unwrap_or_default();

    tracing::info!(tier = ?cfg.tier, seed = cfg.seed, "starting sieve suite");

    // 1. Known vectors and up-front rejections (all tiers)
    {
        let start = Instant::now();
        let inner = differential::check_fixed_vectors();
        report.add_check("vectors.fixed", inner, start.elapsed().as_millis() as u64);

        let start = Instant::now();
        let inner = differential::check_rejections(limits);
        report.add_check("errors.rejections", inner, start.elapsed().as_millis() as u64);
    }

    if budget.exceeded() {
        report.add_result(budget.exceeded_result("fixed vectors"));
        return Ok(report);
    }

    // 2. Differential testing against trial division
    let (iterations, max_bound) = tier_differential_size(cfg.tier);
    {
        let start = Instant::now();
        let inner = differential::check_invariants(iterations, max_bound, limits, Some(cfg.seed));
        report.add_check(
            "differential.invariants",
            inner,
            start.elapsed().as_millis() as u64,
        );
    }

    if budget.exceeded() {
        report.add_result(budget.exceeded_result("differential tests"));
    }

    tracing::info!(
        passed = report.summary.passed,
        failed = report.summary.failed,
        errors = report.summary.errors,
        "sieve suite finished"
    );
    Ok(report)
}
