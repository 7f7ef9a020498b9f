//! Sequential suite runner.
//!
//! Cases run one after another on a single client; a failing case is recorded
//! and the next one starts. Nothing is shared between cases except the remote
//! service's own state.

use crate::client::ItemsClient;
use crate::logging::{log_debug, log_info, log_warn};
use crate::scenarios::Case;
use std::time::{Duration, Instant};

/// Result of a single case.
#[derive(Debug)]
pub struct CaseOutcome {
    pub case: Case,
    /// `None` when the case passed.
    pub failure: Option<anyhow::Error>,
    pub elapsed: Duration,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Outcomes of a suite run, in execution order.
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn outcome(&self, case: Case) -> Option<&CaseOutcome> {
        self.outcomes.iter().find(|o| o.case == case)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

#[derive(Debug)]
pub struct SuiteRunner {
    client: ItemsClient,
}

impl SuiteRunner {
    pub fn new(client: ItemsClient) -> Self {
        Self { client }
    }

    /// Run every case in [`Case::ALL`].
    pub async fn run_all(&self) -> SuiteReport {
        self.run(&Case::ALL).await
    }

    /// Run `cases` in order and collect their outcomes.
    pub async fn run(&self, cases: &[Case]) -> SuiteReport {
        let mut report = SuiteReport::default();

        for &case in cases {
            report.outcomes.push(self.run_case(case).await);
        }

        log_info!(
            base_url = %self.client.config().base_url,
            passed = report.passed(),
            failed = report.failed(),
            "Suite finished"
        );
        report
    }

    async fn run_case(&self, case: Case) -> CaseOutcome {
        log_debug!(case_id = case.id(), endpoint = %case.endpoint(), "Running case");

        let start = Instant::now();
        let result = case.run(&self.client).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => log_info!(
                case_id = case.id(),
                elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                "Case passed"
            ),
            Err(e) => log_warn!(
                case_id = case.id(),
                error = %format!("{e:#}"),
                "Case failed"
            ),
        }

        CaseOutcome {
            case,
            failure: result.err(),
            elapsed,
        }
    }
}
