use thiserror::Error;

/// Everything that can abort a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineFailure {
    #[error("Unable to fetch text: {0}")]
    Fetch(String),
}
