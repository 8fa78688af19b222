/// Non-fatal conditions attached to an otherwise successful generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The loaded catalog had no teams, timeslots, or locations.
    EmptyCatalog,
    /// The catalog was non-empty but enumeration produced no candidates.
    NoFeasibleCandidates,
    /// The ILP solver hit its wall-clock limit before proving optimality.
    IlpTimeLimitHit,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Warning::EmptyCatalog => "empty_catalog",
            Warning::NoFeasibleCandidates => "no_feasible_candidates",
            Warning::IlpTimeLimitHit => "ilp_time_limit_hit",
        })
    }
}
