use std::collections::HashMap;

use crate::model::{Catalog, UnweightedCandidate};

/// Produces every feasible candidate game implied by a catalog.
///
/// A candidate is feasible iff: its two teams share a division, both teams
/// are available at the timeslot, and the location is available at that
/// same timeslot. Enumeration is complete (nothing feasible is omitted)
/// and sound (everything emitted satisfies those constraints) — there is
/// no assignment or conflict resolution here, that is the selector's job.
#[must_use]
pub fn enumerate(catalog: &Catalog) -> Vec<UnweightedCandidate> {
    let mut candidates = Vec::new();

    let mut timeslot_ids: Vec<i32> = catalog.timeslots().map(|ts| ts.id).collect();
    timeslot_ids.sort_unstable();

    for timeslot_id in timeslot_ids {
        let available_locations = {
            let mut locs = catalog.available_locations_for(timeslot_id);
            locs.sort_unstable();
            locs
        };
        if available_locations.is_empty() {
            continue;
        }

        let mut teams_by_division: HashMap<i32, Vec<i32>> = HashMap::new();
        for team in catalog.teams() {
            if catalog.is_team_available(team.id, timeslot_id) {
                teams_by_division.entry(team.division_id).or_default().push(team.id);
            }
        }

        let mut division_ids: Vec<i32> = teams_by_division.keys().copied().collect();
        division_ids.sort_unstable();

        for division_id in division_ids {
            let mut team_ids = teams_by_division.remove(&division_id).unwrap_or_default();
            team_ids.sort_unstable();

            for i in 0..team_ids.len() {
                for j in (i + 1)..team_ids.len() {
                    let (team_a_id, team_b_id) = (team_ids[i], team_ids[j]);
                    for &location_id in &available_locations {
                        candidates.push(UnweightedCandidate {
                            division_id,
                            team_a_id,
                            team_b_id,
                            timeslot_id,
                            location_id,
                        });
                    }
                }
            }
        }
    }

    candidates
}
