use std::path::PathBuf;

use clap::Parser;
use pairing_core::SchedulingConfig;
use serde::Deserialize;

/// Connection parameters consumed only by the catalog loader.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
}

/// The full recognized configuration document: `database` plus the
/// `scheduling.*` keys. Unknown keys at any level fail deserialization,
/// so a typo in a config file is a startup error, not a silently
/// ignored default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub scheduling: SchedulingConfig,
}

impl ServiceConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration document.
    #[arg(long = "config", env = "SCHEDULER_CONFIG_PATH")]
    pub config_path: PathBuf,

    /// Address the HTTP server binds to.
    #[arg(long = "listen-addr", env = "SCHEDULER_LISTEN_ADDR", default_value = "127.0.0.1:8080")]
    pub listen_addr: String,
}
