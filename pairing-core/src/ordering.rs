use chrono::NaiveDate;

use crate::model::{Candidate, Catalog};

/// The tie-break used when sorting candidates by weight: deterministic
/// given identical input, independent of any hash-map iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TieBreakKey {
    date: NaiveDate,
    modifier: String,
    location_name: String,
    team_a_id: i32,
    team_b_id: i32,
}

#[must_use]
pub fn tie_break_key(candidate: &Candidate, catalog: &Catalog) -> TieBreakKey {
    let timeslot = catalog.timeslot(candidate.timeslot_id);
    let location = catalog.location(candidate.location_id);
    TieBreakKey {
        date: timeslot.map_or(NaiveDate::MIN, |t| t.date),
        modifier: timeslot.map_or_else(String::new, |t| t.modifier.clone()),
        location_name: location.map_or_else(String::new, |l| l.name.clone()),
        team_a_id: candidate.team_a_id,
        team_b_id: candidate.team_b_id,
    }
}

/// The final output ordering shared by both selectors: (date, modifier,
/// location name, team_a name).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct OutputOrderKey {
    date: NaiveDate,
    modifier: String,
    location_name: String,
    team_a_name: String,
}

#[must_use]
pub fn output_order_key(candidate: &Candidate, catalog: &Catalog) -> OutputOrderKey {
    let timeslot = catalog.timeslot(candidate.timeslot_id);
    let location = catalog.location(candidate.location_id);
    let team_a = catalog.team(candidate.team_a_id);
    OutputOrderKey {
        date: timeslot.map_or(NaiveDate::MIN, |t| t.date),
        modifier: timeslot.map_or_else(String::new, |t| t.modifier.clone()),
        location_name: location.map_or_else(String::new, |l| l.name.clone()),
        team_a_name: team_a.map_or_else(String::new, |t| t.name.clone()),
    }
}

/// Sorts a schedule in place by the shared output ordering.
pub fn sort_by_output_order(schedule: &mut [Candidate], catalog: &Catalog) {
    schedule.sort_by(|a, b| output_order_key(a, catalog).cmp(&output_order_key(b, catalog)));
}
