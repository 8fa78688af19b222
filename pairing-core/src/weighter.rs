use chrono::Duration;

use crate::config::SchedulingConfig;
use crate::model::{Catalog, UnweightedCandidate};

/// Scores a candidate in `(0, 1]` by multiplying a ranking-balance term and
/// a recent-rematch penalty term. Neither sub-weight can be zero, so a
/// weight is never zero either — selectors rely on candidate *presence*,
/// not weight, to encode feasibility.
#[must_use]
pub fn weigh(candidate: &UnweightedCandidate, catalog: &Catalog, config: &SchedulingConfig) -> f64 {
    ranking_weight(candidate, catalog, config) * recency_weight(candidate, catalog, config)
}

fn ranking_weight(candidate: &UnweightedCandidate, catalog: &Catalog, config: &SchedulingConfig) -> f64 {
    let ranking_a = catalog.team(candidate.team_a_id).and_then(|t| t.previous_year_ranking);
    let ranking_b = catalog.team(candidate.team_b_id).and_then(|t| t.previous_year_ranking);

    match (ranking_a, ranking_b) {
        (Some(a), Some(b)) => {
            let delta = (a - b).unsigned_abs() as f64;
            let ideal = f64::from(config.ideal_ranking_diff.max(1));
            (1.0 - delta / (2.0 * ideal)).max(0.1)
        }
        _ => 0.5,
    }
}

fn recency_weight(candidate: &UnweightedCandidate, catalog: &Catalog, config: &SchedulingConfig) -> f64 {
    let Some(timeslot) = catalog.timeslot(candidate.timeslot_id) else {
        return 1.0;
    };
    let window = Duration::days(i64::from(config.recent_games_weeks) * 7);
    let earliest = timeslot.date - window;

    let recent_meetings = catalog
        .previous_games()
        .iter()
        .filter(|g| g.date >= earliest && g.date < timeslot.date)
        .filter(|g| {
            let pair = (g.team_one_id, g.team_two_id);
            pair == (candidate.team_a_id, candidate.team_b_id)
                || pair == (candidate.team_b_id, candidate.team_a_id)
        })
        .count();

    if recent_meetings == 0 {
        1.0
    } else {
        (1.0 - recent_meetings as f64 * config.recent_game_penalty).max(0.1)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use super::*;
    use crate::model::{Division, Location, PreviousGame, Team, Timeslot};

    fn base_catalog(previous_games: Vec<PreviousGame>) -> Catalog {
        Catalog::new(
            vec![Division { id: 1, name: "U10".into() }],
            vec![
                Team { id: 1, name: "A".into(), division_id: 1, previous_year_ranking: Some(3) },
                Team { id: 2, name: "B".into(), division_id: 1, previous_year_ranking: Some(4) },
            ],
            vec![Location { id: 1, name: "Field 1".into() }],
            vec![Timeslot { id: 1, date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(), modifier: "7pm".into() }],
            HashSet::from([(1, 1), (2, 1)]),
            HashSet::from([(1, 1)]),
            previous_games,
        )
    }

    fn candidate() -> UnweightedCandidate {
        UnweightedCandidate { division_id: 1, team_a_id: 1, team_b_id: 2, timeslot_id: 1, location_id: 1 }
    }

    #[test]
    fn s1_minimum_feasible_weight() {
        let catalog = base_catalog(vec![]);
        let config = SchedulingConfig::default();
        let weight = weigh(&candidate(), &catalog, &config);
        assert!((weight - 0.9).abs() < 1e-9, "expected 0.9, got {weight}");
    }

    #[test]
    fn missing_ranking_is_neutral() {
        let catalog = Catalog::new(
            vec![Division { id: 1, name: "U10".into() }],
            vec![
                Team { id: 1, name: "A".into(), division_id: 1, previous_year_ranking: None },
                Team { id: 2, name: "B".into(), division_id: 1, previous_year_ranking: Some(4) },
            ],
            vec![Location { id: 1, name: "Field 1".into() }],
            vec![Timeslot { id: 1, date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(), modifier: "7pm".into() }],
            HashSet::from([(1, 1), (2, 1)]),
            HashSet::from([(1, 1)]),
            vec![],
        );
        let config = SchedulingConfig::default();
        let weight = weigh(&candidate(), &catalog, &config);
        assert!((weight - 0.5).abs() < 1e-9);
    }

    #[test]
    fn s4_recency_penalty() {
        let catalog = base_catalog(vec![PreviousGame {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 11, 24).unwrap(),
            team_one_id: 1,
            team_two_id: 2,
        }]);
        let config = SchedulingConfig::default();
        let weight = weigh(&candidate(), &catalog, &config);
        let expected = ranking_weight(&candidate(), &catalog, &config) * 0.9;
        assert!((weight - expected).abs() < 1e-9);
    }

    #[test]
    fn recency_ignores_games_outside_the_lookback_window() {
        let catalog = base_catalog(vec![PreviousGame {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            team_one_id: 1,
            team_two_id: 2,
        }]);
        let config = SchedulingConfig::default();
        let weight = weigh(&candidate(), &catalog, &config);
        assert!((weight - 0.9).abs() < 1e-9, "a game outside the window should not penalize");
    }

    #[test]
    fn increasing_recent_game_penalty_never_increases_weight() {
        let catalog = base_catalog(vec![PreviousGame {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 11, 24).unwrap(),
            team_one_id: 1,
            team_two_id: 2,
        }]);
        let mut low = SchedulingConfig::default();
        low.recent_game_penalty = 0.05;
        let mut high = SchedulingConfig::default();
        high.recent_game_penalty = 0.4;

        let weight_low = weigh(&candidate(), &catalog, &low);
        let weight_high = weigh(&candidate(), &catalog, &high);
        assert!(weight_high <= weight_low, "weight_high={weight_high} weight_low={weight_low}");
    }

    #[test]
    fn recency_counts_either_team_order_in_history() {
        let catalog = base_catalog(vec![PreviousGame {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 11, 24).unwrap(),
            team_one_id: 2,
            team_two_id: 1,
        }]);
        let config = SchedulingConfig::default();
        let weight = weigh(&candidate(), &catalog, &config);
        let expected = ranking_weight(&candidate(), &catalog, &config) * 0.9;
        assert!((weight - expected).abs() < 1e-9);
    }
}
