//! Duration classification against the fixed warn/fail limits.

use crate::correlator::Correlation;
use chrono::Duration;
use serde::Serialize;

/// Jobs running longer than this are warned about
pub const WARN_AFTER_MINUTES: i64 = 5;
/// Jobs running longer than this fail
pub const FAIL_AFTER_MINUTES: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
    MissingEnd,
}

/// Result for a single process id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    pub pid: String,
    /// `None` when no END was seen. May be negative.
    pub elapsed: Option<Duration>,
    pub verdict: Verdict,
}

impl JobOutcome {
    /// Whole minutes, truncated toward zero
    pub fn minutes(&self) -> Option<i64> {
        self.elapsed.map(|d| d.num_minutes())
    }

    /// Residual whole seconds; carries the sign of the duration
    pub fn seconds(&self) -> Option<i64> {
        self.elapsed.map(|d| d.num_seconds() % 60)
    }
}

/// Aggregate counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_jobs: usize,
    pub missing_end: usize,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

impl Summary {
    pub fn record(&mut self, verdict: Verdict) {
        self.total_jobs += 1;
        match verdict {
            Verdict::Pass => self.passed += 1,
            Verdict::Warn => self.warned += 1,
            Verdict::Fail => self.failed += 1,
            Verdict::MissingEnd => self.missing_end += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub outcomes: Vec<JobOutcome>,
    pub summary: Summary,
}

/// Strictly-greater-than limits: exactly 5 minutes passes, exactly 10 warns.
pub fn classify_duration(elapsed: Duration) -> Verdict {
    if elapsed > Duration::minutes(FAIL_AFTER_MINUTES) {
        Verdict::Fail
    } else if elapsed > Duration::minutes(WARN_AFTER_MINUTES) {
        Verdict::Warn
    } else {
        Verdict::Pass
    }
}

/// Classify every job that has a START, in process id order.
///
/// Pids that only ever logged an END are not part of the result.
pub fn classify(correlation: &Correlation) -> Classification {
    let mut classification = Classification::default();

    for (pid, start) in correlation.start_times() {
        let outcome = match correlation.end_time(pid) {
            None => JobOutcome {
                pid: pid.clone(),
                elapsed: None,
                verdict: Verdict::MissingEnd,
            },
            Some(end) => {
                let elapsed = end.signed_duration_since(*start);
                JobOutcome {
                    pid: pid.clone(),
                    elapsed: Some(elapsed),
                    verdict: classify_duration(elapsed),
                }
            }
        };

        classification.summary.record(outcome.verdict);
        classification.outcomes.push(outcome);
    }

    classification
}
