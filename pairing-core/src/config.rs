use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// Which selector a generation should dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Greedy,
    Ilp,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Greedy
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Ilp => "ilp",
        })
    }
}

impl std::str::FromStr for Algorithm {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(Algorithm::Greedy),
            "ilp" => Ok(Algorithm::Ilp),
            other => Err(SchedulerError::Validation(format!(
                "unknown algorithm: {other}"
            ))),
        }
    }
}

/// The closed set of weighting and solver knobs the weighter and the ILP
/// selector read from. This is the entire configurable surface of the
/// optimizer; there is deliberately no catch-all `extra` field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchedulingConfig {
    #[serde(default = "default_recent_games_weeks")]
    pub recent_games_weeks: u32,

    #[serde(default = "default_recent_game_penalty")]
    pub recent_game_penalty: f64,

    #[serde(default = "default_ideal_ranking_diff")]
    pub ideal_ranking_diff: u32,

    #[serde(default)]
    pub default_algorithm: Algorithm,

    #[serde(default = "default_ilp_time_limit_seconds")]
    pub ilp_time_limit_seconds: u64,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            recent_games_weeks: default_recent_games_weeks(),
            recent_game_penalty: default_recent_game_penalty(),
            ideal_ranking_diff: default_ideal_ranking_diff(),
            default_algorithm: Algorithm::default(),
            ilp_time_limit_seconds: default_ilp_time_limit_seconds(),
        }
    }
}

fn default_recent_games_weeks() -> u32 {
    3
}

fn default_recent_game_penalty() -> f64 {
    0.1
}

fn default_ideal_ranking_diff() -> u32 {
    5
}

fn default_ilp_time_limit_seconds() -> u64 {
    60
}
