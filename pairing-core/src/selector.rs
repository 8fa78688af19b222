mod greedy;
mod ilp;

pub use greedy::GreedySelector;
pub use ilp::IlpSelector;

use crate::config::{Algorithm, SchedulingConfig};
use crate::error::SchedulerError;
use crate::model::{Candidate, Catalog, ScheduledGame};
use crate::warning::Warning;

/// Result of a selection pass: the conflict-free schedule plus any
/// warnings the selector itself wants attached (only `IlpSelector` ever
/// produces one, `ilp_time_limit_hit`).
#[derive(Debug, Clone)]
pub struct SelectionOutcome {
    pub schedule: Vec<ScheduledGame>,
    pub warnings: Vec<Warning>,
}

/// A strategy that chooses a conflict-free, weight-maximizing subset of
/// candidates. `GreedySelector` and `IlpSelector` are the only two
/// variants; adding a third is a closed change to [`for_algorithm`].
pub trait Selector {
    fn select(
        &self,
        candidates: Vec<Candidate>,
        catalog: &Catalog,
    ) -> Result<SelectionOutcome, SchedulerError>;
}

/// Maps an [`Algorithm`] to the selector implementation that serves it.
#[must_use]
pub fn for_algorithm(algorithm: Algorithm, config: &SchedulingConfig) -> Box<dyn Selector> {
    match algorithm {
        Algorithm::Greedy => Box::new(GreedySelector),
        Algorithm::Ilp => Box::new(IlpSelector::new(config.ilp_time_limit_seconds)),
    }
}
