use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A grouping scope within which two teams may be paired against each other.
///
/// Teams in different divisions are never candidates for the same game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub id: i32,
    pub name: String,
}

/// A team entered in exactly one division.
///
/// `previous_year_ranking` is `None` for teams with no ranking history (new
/// programs, newly promoted teams); this is a first-class case handled by
/// the weighter, not a default to paper over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub division_id: i32,
    pub previous_year_ranking: Option<i32>,
}

/// A venue at which games may be played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: i32,
    pub name: String,
}

/// A single bookable slot: a calendar date plus a free-form modifier that
/// disambiguates multiple slots on the same date (`"AM"`, `"1"`, `""`, ...).
///
/// `(date, modifier)` is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timeslot {
    pub id: i32,
    pub date: NaiveDate,
    pub modifier: String,
}

/// A previously-played game, used by the weighter to penalize rematches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousGame {
    pub id: i32,
    pub date: NaiveDate,
    pub team_one_id: i32,
    pub team_two_id: i32,
}

/// The full set of facts a generation run is scoped to: every division,
/// team, location and timeslot that falls inside the requested window, plus
/// the availability relations and recent-history rows needed to enumerate
/// and weigh candidates.
///
/// A `Catalog` never mutates once loaded; the enumerator, weighter and
/// selectors only ever read from it.
#[derive(Debug, Clone)]
pub struct Catalog {
    divisions: HashMap<i32, Division>,
    teams: HashMap<i32, Team>,
    locations: HashMap<i32, Location>,
    timeslots: HashMap<i32, Timeslot>,
    team_availability: HashSet<(i32, i32)>,
    location_availability: HashSet<(i32, i32)>,
    previous_games: Vec<PreviousGame>,
}

impl Catalog {
    #[must_use]
    pub fn new(
        divisions: Vec<Division>,
        teams: Vec<Team>,
        locations: Vec<Location>,
        timeslots: Vec<Timeslot>,
        team_availability: HashSet<(i32, i32)>,
        location_availability: HashSet<(i32, i32)>,
        previous_games: Vec<PreviousGame>,
    ) -> Self {
        Self {
            divisions: divisions.into_iter().map(|d| (d.id, d)).collect(),
            teams: teams.into_iter().map(|t| (t.id, t)).collect(),
            locations: locations.into_iter().map(|l| (l.id, l)).collect(),
            timeslots: timeslots.into_iter().map(|t| (t.id, t)).collect(),
            team_availability,
            location_availability,
            previous_games,
        }
    }

    /// Validates the non-empty-catalog invariant from the loader contract.
    ///
    /// A catalog is empty if it has no teams, no timeslots, or no locations;
    /// divisions with zero teams and timeslots with zero available locations
    /// are tolerated and simply contribute no candidates.
    pub fn require_nonempty(&self) -> Result<(), CatalogError> {
        if self.teams.is_empty() || self.timeslots.is_empty() || self.locations.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(())
    }

    #[must_use]
    pub fn divisions(&self) -> impl Iterator<Item = &Division> {
        self.divisions.values()
    }

    #[must_use]
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    #[must_use]
    pub fn timeslots(&self) -> impl Iterator<Item = &Timeslot> {
        self.timeslots.values()
    }

    #[must_use]
    pub fn team(&self, id: i32) -> Option<&Team> {
        self.teams.get(&id)
    }

    #[must_use]
    pub fn division(&self, id: i32) -> Option<&Division> {
        self.divisions.get(&id)
    }

    #[must_use]
    pub fn location(&self, id: i32) -> Option<&Location> {
        self.locations.get(&id)
    }

    #[must_use]
    pub fn timeslot(&self, id: i32) -> Option<&Timeslot> {
        self.timeslots.get(&id)
    }

    #[must_use]
    pub fn teams_in_division(&self, division_id: i32) -> Vec<&Team> {
        self.teams
            .values()
            .filter(|t| t.division_id == division_id)
            .collect()
    }

    #[must_use]
    pub fn is_team_available(&self, team_id: i32, timeslot_id: i32) -> bool {
        self.team_availability.contains(&(team_id, timeslot_id))
    }

    #[must_use]
    pub fn available_locations_for(&self, timeslot_id: i32) -> Vec<i32> {
        self.location_availability
            .iter()
            .filter(|(_, ts)| *ts == timeslot_id)
            .map(|(loc, _)| *loc)
            .collect()
    }

    #[must_use]
    pub fn previous_games(&self) -> &[PreviousGame] {
        &self.previous_games
    }
}

/// An unweighted pairing the enumerator has determined is legal: the two
/// teams are in the same division, both are available at `timeslot_id`, and
/// `location_id` is available at that same timeslot.
///
/// Team ordering is canonicalized by ascending id so that `(a, b)` and
/// `(b, a)` are never both produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnweightedCandidate {
    pub division_id: i32,
    pub team_a_id: i32,
    pub team_b_id: i32,
    pub timeslot_id: i32,
    pub location_id: i32,
}

/// A candidate pairing after the weighter has scored it.
///
/// Higher weight means more preferred: `weight` folds together ranking
/// balance and recent-rematch avoidance into a single ordering key that
/// selectors treat as opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub division_id: i32,
    pub team_a_id: i32,
    pub team_b_id: i32,
    pub timeslot_id: i32,
    pub location_id: i32,
    pub weight: f64,
}

impl From<(UnweightedCandidate, f64)> for Candidate {
    fn from((c, weight): (UnweightedCandidate, f64)) -> Self {
        Self {
            division_id: c.division_id,
            team_a_id: c.team_a_id,
            team_b_id: c.team_b_id,
            timeslot_id: c.timeslot_id,
            location_id: c.location_id,
            weight,
        }
    }
}

/// A candidate chosen by a selector to appear in the final schedule.
pub type ScheduledGame = Candidate;
