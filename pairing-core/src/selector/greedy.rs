use std::collections::HashSet;

use crate::error::SchedulerError;
use crate::model::{Candidate, Catalog};
use crate::ordering::{sort_by_output_order, tie_break_key};
use crate::selector::{SelectionOutcome, Selector};

/// Sorts candidates by weight descending (deterministic tie-break) and
/// greedily accepts each one that does not conflict with an already
/// accepted candidate. O(n log n) for the sort, O(n) for the scan.
/// Feasible but not necessarily optimal.
pub struct GreedySelector;

impl Selector for GreedySelector {
    fn select(
        &self,
        mut candidates: Vec<Candidate>,
        catalog: &Catalog,
    ) -> Result<SelectionOutcome, SchedulerError> {
        candidates.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| tie_break_key(a, catalog).cmp(&tie_break_key(b, catalog)))
        });

        let mut used_teams: HashSet<i32> = HashSet::new();
        let mut used_slots: HashSet<(i32, i32)> = HashSet::new();
        let mut schedule = Vec::new();

        for candidate in candidates {
            let slot = (candidate.location_id, candidate.timeslot_id);
            if used_teams.contains(&candidate.team_a_id)
                || used_teams.contains(&candidate.team_b_id)
                || used_slots.contains(&slot)
            {
                continue;
            }
            used_teams.insert(candidate.team_a_id);
            used_teams.insert(candidate.team_b_id);
            used_slots.insert(slot);
            schedule.push(candidate);
        }

        sort_by_output_order(&mut schedule, catalog);

        Ok(SelectionOutcome { schedule, warnings: Vec::new() })
    }
}
