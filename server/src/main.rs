use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use server::config::{Cli, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    server::init_tracing();

    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.config_path)
        .with_context(|| format!("reading config file at {}", cli.config_path.display()))?;
    let config =
        ServiceConfig::from_toml_str(&raw).context("parsing scheduler configuration")?;

    let app = server::build_app(&config).await.context("building the scheduler service")?;

    let listener = TcpListener::bind(&cli.listen_addr)
        .await
        .with_context(|| format!("binding {}", cli.listen_addr))?;
    tracing::info!("listening on {}", cli.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
