use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use server::config::ServiceConfig;

/// Batch counterpart to the HTTP service: runs one pairing generation
/// against a configured database and prints the JSON response to stdout,
/// for cron-style generation without standing up `server`.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the same TOML configuration document `server` reads.
    #[arg(long = "config", env = "SCHEDULER_CONFIG_PATH")]
    config_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a schedule for a date window and print it as JSON.
    Generate {
        /// Inclusive window start, `YYYY-MM-DD`.
        #[arg(long)]
        start_date: String,
        /// Inclusive window end, `YYYY-MM-DD`.
        #[arg(long)]
        end_date: String,
        /// `greedy` or `ilp`; defaults to `scheduling.default_algorithm`
        /// from the configuration document when omitted.
        #[arg(long)]
        algorithm: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.config_path)
        .with_context(|| format!("reading config file at {}", cli.config_path.display()))?;
    let config = ServiceConfig::from_toml_str(&raw).context("parsing scheduler configuration")?;

    let default_algorithm = config.scheduling.default_algorithm;
    let db_config = db::Config::new(config.database.url.clone());
    let client = db::Client::new(&db_config).await.context("connecting to database")?;
    let facade = pairing_core::Facade::new(client, config.scheduling);

    match cli.command {
        Command::Generate { start_date, end_date, algorithm } => {
            let start = parse_date("start_date", &start_date)?;
            let end = parse_date("end_date", &end_date)?;
            let algorithm = algorithm.unwrap_or_else(|| default_algorithm.to_string());

            let result = facade
                .generate(start, end, &algorithm)
                .await
                .context("generating schedule")?;

            let mut body = serde_json::to_value(&result)?;
            if let Some(obj) = body.as_object_mut() {
                obj.insert("success".to_string(), serde_json::Value::Bool(true));
            }
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(())
}

fn parse_date(field: &str, raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("{field} is not a valid YYYY-MM-DD date: {raw}"))
}
