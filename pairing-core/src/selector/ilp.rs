use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::error::SchedulerError;
use crate::model::{Candidate, Catalog};
use crate::ordering::{sort_by_output_order, tie_break_key};
use crate::selector::{SelectionOutcome, Selector};
use crate::warning::Warning;

/// Solves the 0/1 program of the design directly: maximize total weight
/// subject to each team and each (location, timeslot) slot being used at
/// most once. No pure-Rust MILP crate covers this, so the search is a
/// hand-rolled depth-first branch-and-bound over inclusion/exclusion of
/// the next candidate, pruned by a sum-of-remaining-weights upper bound
/// and cut off at a wall-clock limit.
pub struct IlpSelector {
    time_limit: Duration,
}

impl IlpSelector {
    #[must_use]
    pub fn new(time_limit_seconds: u64) -> Self {
        Self { time_limit: Duration::from_secs(time_limit_seconds) }
    }
}

impl Selector for IlpSelector {
    fn select(
        &self,
        candidates: Vec<Candidate>,
        catalog: &Catalog,
    ) -> Result<SelectionOutcome, SchedulerError> {
        // An empty candidate list is the only way this program can be
        // infeasible: the all-zero assignment is always feasible otherwise.
        if candidates.is_empty() {
            return Err(SchedulerError::Scheduler("ILP infeasible: empty candidate list".into()));
        }

        let mut ordered = candidates;
        ordered.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| tie_break_key(a, catalog).cmp(&tie_break_key(b, catalog)))
        });

        let outcome = BranchAndBound::new(&ordered, self.time_limit).run();

        let mut schedule: Vec<Candidate> =
            outcome.best.into_iter().map(|i| ordered[i].clone()).collect();
        sort_by_output_order(&mut schedule, catalog);

        let mut warnings = Vec::new();
        if outcome.time_limit_hit {
            warnings.push(Warning::IlpTimeLimitHit);
        }

        Ok(SelectionOutcome { schedule, warnings })
    }
}

struct BranchAndBound<'a> {
    candidates: &'a [Candidate],
    /// `suffix_weight[i]` is the sum of weights of `candidates[i..]`, an
    /// upper bound on what a branch rooted at `i` could still add — weak
    /// because it ignores conflicts, but cheap and always admissible.
    suffix_weight: Vec<f64>,
    deadline: Instant,
}

struct SearchOutcome {
    best: Vec<usize>,
    time_limit_hit: bool,
}

struct SearchState {
    used_teams: HashSet<i32>,
    used_slots: HashSet<(i32, i32)>,
    current: Vec<usize>,
    current_weight: f64,
    best_weight: f64,
    best: Vec<usize>,
    time_limit_hit: bool,
}

impl<'a> BranchAndBound<'a> {
    fn new(candidates: &'a [Candidate], time_limit: Duration) -> Self {
        let mut suffix_weight = vec![0.0; candidates.len() + 1];
        for i in (0..candidates.len()).rev() {
            suffix_weight[i] = suffix_weight[i + 1] + candidates[i].weight;
        }
        Self { candidates, suffix_weight, deadline: Instant::now() + time_limit }
    }

    fn run(&self) -> SearchOutcome {
        let mut state = SearchState {
            used_teams: HashSet::new(),
            used_slots: HashSet::new(),
            current: Vec::new(),
            current_weight: 0.0,
            best_weight: 0.0,
            best: Vec::new(),
            time_limit_hit: false,
        };
        self.search(0, &mut state);
        SearchOutcome { best: state.best, time_limit_hit: state.time_limit_hit }
    }

    fn search(&self, index: usize, state: &mut SearchState) {
        if state.time_limit_hit {
            return;
        }
        if Instant::now() >= self.deadline {
            state.time_limit_hit = true;
            return;
        }
        if state.current_weight > state.best_weight {
            state.best_weight = state.current_weight;
            state.best = state.current.clone();
        }
        if index == self.candidates.len() {
            return;
        }
        // Every candidate from `index` on has already been excluded in
        // some ancestor branch or is about to be tried here; if even
        // taking all of them couldn't beat the incumbent, stop exploring.
        if state.current_weight + self.suffix_weight[index] <= state.best_weight {
            return;
        }

        let candidate = &self.candidates[index];
        let slot = (candidate.location_id, candidate.timeslot_id);
        let feasible = !state.used_teams.contains(&candidate.team_a_id)
            && !state.used_teams.contains(&candidate.team_b_id)
            && !state.used_slots.contains(&slot);

        if feasible {
            state.used_teams.insert(candidate.team_a_id);
            state.used_teams.insert(candidate.team_b_id);
            state.used_slots.insert(slot);
            state.current.push(index);
            state.current_weight += candidate.weight;

            self.search(index + 1, state);

            state.current_weight -= candidate.weight;
            state.current.pop();
            state.used_slots.remove(&slot);
            state.used_teams.remove(&candidate.team_b_id);
            state.used_teams.remove(&candidate.team_a_id);
        }

        if state.time_limit_hit {
            return;
        }
        self.search(index + 1, state);
    }
}
