use thiserror::Error;

/// Failure modes of the catalog load step.
///
/// `Empty` is deliberately distinct from `Configuration`: it is not a
/// failure of the data source, it is a fact about the requested window,
/// and the facade turns it into a successful, empty generation rather than
/// an error response.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("catalog is empty for the requested window")]
    Empty,
}

/// The error taxonomy surfaced at the scheduler boundary.
///
/// `EmptyCatalog` and `NoFeasibleCandidates` from the design's error
/// taxonomy are intentionally absent here: both are successful outcomes
/// (an empty schedule plus a warning), not failures, and are represented
/// that way in [`crate::facade::GenerationResult`] rather than as `Err`
/// variants.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("scheduler error: {0}")]
    Scheduler(String),
}

impl From<CatalogError> for SchedulerError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Configuration(msg) => SchedulerError::Configuration(msg),
            CatalogError::Empty => {
                SchedulerError::Scheduler("empty catalog reached selector boundary".into())
            }
        }
    }
}
