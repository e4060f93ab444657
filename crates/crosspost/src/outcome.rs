//! What a job run did.

use tracing::{info, warn};

/// Result of one job run.
///
/// Every variant is a normal exit; the process status stays zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// New items were found. `failed` items stay unrecorded and are retried next run.
    Delivered { sent: usize, failed: usize },
    /// The source had nothing that was not already announced.
    NothingNew,
    /// A required setting is missing; no request was made.
    NotConfigured,
    /// The source could not be read; state was left untouched.
    SourceFailed,
}

impl RunOutcome {
    pub fn log(&self, job: &str) {
        match self {
            RunOutcome::Delivered { sent, failed: 0 } => info!(job, sent, "run complete"),
            RunOutcome::Delivered { sent, failed } => {
                warn!(job, sent, failed, "run complete with failed deliveries")
            }
            RunOutcome::NothingNew => info!(job, "run complete, nothing new"),
            RunOutcome::NotConfigured => warn!(job, "run skipped, not configured"),
            RunOutcome::SourceFailed => warn!(job, "run aborted, source unavailable"),
        }
    }
}
