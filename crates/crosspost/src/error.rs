//! Job-level errors.
//!
//! Network failures never surface here; jobs log them and report a
//! [`RunOutcome`](crate::RunOutcome). Only local I/O ends a run with an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobError {
    #[error(transparent)]
    State(#[from] crosspost_state::StateError),

    #[error("failed to write CI output: {0}")]
    Output(#[from] std::io::Error),
}
