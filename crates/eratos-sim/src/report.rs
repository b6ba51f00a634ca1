use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct SimReport {
    pub suite: String,
    pub seed: u64,
    pub summary: SimSummary,
    pub results: Vec<CheckResult>,
}

#[derive(Debug, Serialize, Clone, Default)]
pub struct SimSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
}

#[derive(Debug, Serialize, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: Option<String>,
    pub duration_ms: u64,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Passed, // Property held
    Failed, // Property broken
    Error,  // Harness problem (e.g. time budget)
}

impl SimReport {
    pub fn new(suite: &str, seed: u64) -> Self {
        Self {
            suite: suite.to_string(),
            seed,
            summary: SimSummary::default(),
            results: Vec::new(),
        }
    }

    /// Add a pre-built CheckResult directly.
    pub fn add_result(&mut self, result: CheckResult) {
        self.summary.total += 1;
        match result.status {
            CheckStatus::Passed => self.summary.passed += 1,
            CheckStatus::Failed => self.summary.failed += 1,
            CheckStatus::Error => self.summary.errors += 1,
        }
        self.results.push(result);
    }

    pub fn add_check(&mut self, name: &str, result: Result<()>, duration_ms: u64) {
        let (status, message) = match result {
            Ok(()) => (CheckStatus::Passed, None),
            Err(e) => (CheckStatus::Failed, Some(format!("{:#}", e))),
        };
        self.add_result(CheckResult {
            name: name.to_string(),
            status,
            message,
            duration_ms,
        });
    }

    pub fn is_clean(&self) -> bool {
        self.summary.failed == 0 && self.summary.errors == 0
    }
}
