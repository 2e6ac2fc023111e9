use thiserror::Error;
use tokio::task::JoinError;

use crate::pipeline::coordinator::Phase;

/// Failures raised by a pipeline run.
///
/// The pipeline is fail-fast: the first failed task aborts the whole run
/// and no partial mapping is handed back to the caller.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A mapper or reducer task panicked or was cancelled before joining.
    #[error("{phase} task failed: {source}")]
    TaskFailure {
        phase: Phase,
        #[source]
        source: JoinError,
    },
}

impl PipelineError {
    /// The phase the run was in when it failed.
    pub fn phase(&self) -> Phase {
        match self {
            Self::TaskFailure { phase, .. } => *phase,
        }
    }
}
