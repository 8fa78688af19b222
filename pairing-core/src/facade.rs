use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::config::{Algorithm, SchedulingConfig};
use crate::enumerator;
use crate::error::{CatalogError, SchedulerError};
use crate::loader::CatalogLoader;
use crate::selector;
use crate::warning::Warning;
use crate::weighter;

/// One row of the returned schedule, with names resolved from the catalog
/// so the caller never has to join back against ids.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduledGameView {
    pub game_id: u32,
    pub date: NaiveDate,
    pub time_modifier: String,
    pub location: String,
    pub division: String,
    pub team_a: String,
    pub team_b: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationMetadata {
    pub total_games: usize,
    pub algorithm: Algorithm,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub schedule: Vec<ScheduledGameView>,
    pub metadata: GenerationMetadata,
    pub warnings: Vec<String>,
}

/// Orchestrates the full pipeline: load, enumerate, weigh, select,
/// normalize. This is the only entry point the `server` and `cli`
/// binaries call into.
pub struct Facade<L: CatalogLoader> {
    loader: L,
    config: SchedulingConfig,
}

impl<L: CatalogLoader> Facade<L> {
    pub fn new(loader: L, config: SchedulingConfig) -> Self {
        Self { loader, config }
    }

    pub async fn generate(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        algorithm: &str,
    ) -> Result<GenerationResult, SchedulerError> {
        let algorithm: Algorithm = algorithm.parse()?;

        if start_date > end_date {
            return Err(SchedulerError::Validation(format!(
                "start_date {start_date} is after end_date {end_date}"
            )));
        }

        let catalog = match self
            .loader
            .load(start_date, end_date, self.config.recent_games_weeks)
            .await
        {
            Ok(catalog) => catalog,
            Err(CatalogError::Empty) => {
                log::warn!("catalog empty for window {start_date}..={end_date}");
                return Ok(empty_result(algorithm, vec![Warning::EmptyCatalog]));
            }
            Err(CatalogError::Configuration(msg)) => {
                return Err(SchedulerError::Configuration(msg));
            }
        };

        let unweighted = enumerator::enumerate(&catalog);
        log::info!("enumerated {} candidates", unweighted.len());
        if unweighted.is_empty() {
            return Ok(empty_result(algorithm, vec![Warning::NoFeasibleCandidates]));
        }

        let weighted = unweighted
            .into_iter()
            .map(|c| {
                let weight = weighter::weigh(&c, &catalog, &self.config);
                (c, weight).into()
            })
            .collect();

        let selector = selector::for_algorithm(algorithm, &self.config);
        let outcome = selector.select(weighted, &catalog)?;
        log::info!(
            "selector {algorithm} returned {} games, warnings={:?}",
            outcome.schedule.len(),
            outcome.warnings
        );

        let schedule: Vec<ScheduledGameView> = outcome
            .schedule
            .into_iter()
            .enumerate()
            .map(|(i, game)| ScheduledGameView {
                game_id: i as u32 + 1,
                date: catalog.timeslot(game.timeslot_id).map_or(NaiveDate::MIN, |t| t.date),
                time_modifier: catalog
                    .timeslot(game.timeslot_id)
                    .map_or_else(String::new, |t| t.modifier.clone()),
                location: catalog
                    .location(game.location_id)
                    .map_or_else(String::new, |l| l.name.clone()),
                division: catalog
                    .division(game.division_id)
                    .map_or_else(String::new, |d| d.name.clone()),
                team_a: catalog.team(game.team_a_id).map_or_else(String::new, |t| t.name.clone()),
                team_b: catalog.team(game.team_b_id).map_or_else(String::new, |t| t.name.clone()),
                weight: game.weight,
            })
            .collect();

        Ok(GenerationResult {
            metadata: GenerationMetadata {
                total_games: schedule.len(),
                algorithm,
                generated_at: Utc::now(),
            },
            schedule,
            warnings: outcome.warnings.into_iter().map(|w| w.to_string()).collect(),
        })
    }
}

fn empty_result(algorithm: Algorithm, warnings: Vec<Warning>) -> GenerationResult {
    GenerationResult {
        schedule: Vec::new(),
        metadata: GenerationMetadata { total_games: 0, algorithm, generated_at: Utc::now() },
        warnings: warnings.into_iter().map(|w| w.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::{Catalog, Division, Location, Team, Timeslot};

    struct StaticLoader(Option<Catalog>);

    #[async_trait::async_trait]
    impl CatalogLoader for StaticLoader {
        async fn load(
            &self,
            _window_start: NaiveDate,
            _window_end: NaiveDate,
            _recent_games_weeks: u32,
        ) -> Result<Catalog, CatalogError> {
            self.0.clone().ok_or(CatalogError::Empty)
        }
    }

    fn s1_catalog() -> Catalog {
        Catalog::new(
            vec![Division { id: 1, name: "U10".into() }],
            vec![
                Team { id: 1, name: "T1".into(), division_id: 1, previous_year_ranking: Some(3) },
                Team { id: 2, name: "T2".into(), division_id: 1, previous_year_ranking: Some(4) },
            ],
            vec![Location { id: 1, name: "L".into() }],
            vec![Timeslot {
                id: 1,
                date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
                modifier: "7pm".into(),
            }],
            HashSet::from([(1, 1), (2, 1)]),
            HashSet::from([(1, 1)]),
            vec![],
        )
    }

    #[tokio::test]
    async fn s1_minimum_feasible() {
        let facade = Facade::new(StaticLoader(Some(s1_catalog())), SchedulingConfig::default());
        let result = facade
            .generate(
                NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
                "greedy",
            )
            .await
            .unwrap();

        assert_eq!(result.schedule.len(), 1);
        assert_eq!(result.schedule[0].game_id, 1);
        assert!((result.schedule[0].weight - 0.9).abs() < 1e-9);
        assert!(result.warnings.is_empty());
    }

    #[tokio::test]
    async fn s6_empty_window_returns_warning_not_error() {
        let facade = Facade::new(StaticLoader(None), SchedulingConfig::default());
        let result = facade
            .generate(
                NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
                "greedy",
            )
            .await
            .unwrap();

        assert!(result.schedule.is_empty());
        assert_eq!(result.warnings, vec!["empty_catalog".to_string()]);
    }

    #[tokio::test]
    async fn unknown_algorithm_is_validation_error() {
        let facade = Facade::new(StaticLoader(Some(s1_catalog())), SchedulingConfig::default());
        let result = facade
            .generate(
                NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
                "bogus",
            )
            .await;
        assert!(matches!(result, Err(SchedulerError::Validation(_))));
    }

    #[tokio::test]
    async fn inverted_window_is_validation_error() {
        let facade = Facade::new(StaticLoader(Some(s1_catalog())), SchedulingConfig::default());
        let result = facade
            .generate(
                NaiveDate::from_ymd_opt(2025, 12, 2).unwrap(),
                NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
                "greedy",
            )
            .await;
        assert!(matches!(result, Err(SchedulerError::Validation(_))));
    }

    /// A denser catalog: two divisions, six teams, three timeslots, two
    /// locations, some availability gaps. Exercises conflict-freedom,
    /// division purity, availability, and window bounds (testable
    /// properties 1-4) against a schedule with real contention, under
    /// both selectors.
    fn dense_catalog() -> Catalog {
        let d1 = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 12, 2).unwrap();
        Catalog::new(
            vec![Division { id: 1, name: "U10".into() }, Division { id: 2, name: "U12".into() }],
            vec![
                Team { id: 1, name: "A".into(), division_id: 1, previous_year_ranking: Some(1) },
                Team { id: 2, name: "B".into(), division_id: 1, previous_year_ranking: Some(2) },
                Team { id: 3, name: "C".into(), division_id: 1, previous_year_ranking: Some(8) },
                Team { id: 4, name: "D".into(), division_id: 2, previous_year_ranking: None },
                Team { id: 5, name: "E".into(), division_id: 2, previous_year_ranking: Some(5) },
                Team { id: 6, name: "F".into(), division_id: 2, previous_year_ranking: Some(6) },
            ],
            vec![Location { id: 1, name: "Field 1".into() }, Location { id: 2, name: "Field 2".into() }],
            vec![
                Timeslot { id: 1, date: d1, modifier: "AM".into() },
                Timeslot { id: 2, date: d1, modifier: "PM".into() },
                Timeslot { id: 3, date: d2, modifier: "AM".into() },
            ],
            HashSet::from([
                (1, 1), (2, 1), (3, 1),
                (1, 2), (2, 2), (4, 2), (5, 2), (6, 2),
                (3, 3), (4, 3), (5, 3), (6, 3),
            ]),
            HashSet::from([(1, 1), (2, 1), (1, 2), (2, 2), (1, 3), (2, 3)]),
            vec![],
        )
    }

    fn assert_universal_invariants(result: &GenerationResult, start: NaiveDate, end: NaiveDate) {
        let u10 = ["A", "B", "C"];

        let mut used_teams = HashSet::new();
        let mut used_slots = HashSet::new();
        for game in &result.schedule {
            assert!(used_teams.insert(game.team_a.clone()), "team {} double-booked", game.team_a);
            assert!(used_teams.insert(game.team_b.clone()), "team {} double-booked", game.team_b);
            assert!(used_slots.insert((game.location.clone(), game.date, game.time_modifier.clone())));

            assert!((0.01..=1.0).contains(&game.weight));
            assert!(game.date >= start && game.date <= end);

            let team_a_division = if u10.contains(&game.team_a.as_str()) { "U10" } else { "U12" };
            let team_b_division = if u10.contains(&game.team_b.as_str()) { "U10" } else { "U12" };
            assert_eq!(team_a_division, team_b_division, "cross-division pairing: {game:?}");
            assert_eq!(game.division, team_a_division);
        }
    }

    #[tokio::test]
    async fn universal_invariants_hold_under_both_selectors() {
        let start = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 12, 2).unwrap();

        for algorithm in ["greedy", "ilp"] {
            let facade = Facade::new(StaticLoader(Some(dense_catalog())), SchedulingConfig::default());
            let result = facade.generate(start, end, algorithm).await.unwrap();
            assert!(!result.schedule.is_empty(), "{algorithm} produced no games");
            assert_universal_invariants(&result, start, end);
        }
    }

    #[tokio::test]
    async fn round_trip_identity_is_deterministic_modulo_timestamp() {
        let start = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 12, 2).unwrap();

        let facade = Facade::new(StaticLoader(Some(dense_catalog())), SchedulingConfig::default());
        let first = facade.generate(start, end, "greedy").await.unwrap();
        let second = facade.generate(start, end, "greedy").await.unwrap();

        assert_eq!(first.metadata.total_games, second.metadata.total_games);
        assert_eq!(first.warnings, second.warnings);
        for (a, b) in first.schedule.iter().zip(second.schedule.iter()) {
            assert_eq!(a.game_id, b.game_id);
            assert_eq!(a.date, b.date);
            assert_eq!(a.time_modifier, b.time_modifier);
            assert_eq!(a.location, b.location);
            assert_eq!(a.team_a, b.team_a);
            assert_eq!(a.team_b, b.team_b);
            assert!((a.weight - b.weight).abs() < 1e-9);
        }
    }
}
