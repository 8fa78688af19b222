pub mod errors;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use sea_orm::{ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter};

use entity::prelude as ent;
use entity::{location_availability, previous_game, team_availability, timeslot};
use migration::{Migrator, MigratorTrait};
use pairing_core::{CatalogError, CatalogLoader};

pub use errors::ConnectError;
pub use sea_orm::DbErr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    connection_url: String,
}

impl Config {
    pub fn new(connection_url: impl Into<String>) -> Self {
        Self { connection_url: connection_url.into() }
    }
}

/// Owns the live connection pool and implements
/// `pairing_core::CatalogLoader` against it. This is the only place in
/// the workspace that knows `sea-orm`.
#[derive(Debug)]
pub struct Client {
    connection: DatabaseConnection,
}

impl Client {
    pub async fn new(config: &Config) -> Result<Self, ConnectError> {
        let connection: DatabaseConnection = Database::connect(&config.connection_url).await?;

        if connection.ping().await.is_err() {
            return Err(ConnectError::Ping);
        }

        let client = Client { connection };
        client.up().await.map_err(ConnectError::Migrate)?;

        Ok(client)
    }

    pub async fn up(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Backing query for `GET /health`; never fails the HTTP call, the
    /// caller just reports whichever bool comes back.
    pub async fn is_healthy(&self) -> bool {
        self.connection.ping().await.is_ok()
    }
}

#[async_trait]
impl CatalogLoader for Client {
    async fn load(
        &self,
        window_start: NaiveDate,
        window_end: NaiveDate,
        recent_games_weeks: u32,
    ) -> Result<pairing_core::Catalog, CatalogError> {
        let started = std::time::Instant::now();
        let conn = &self.connection;

        let divisions = ent::Division::find().all(conn).await.map_err(query_failed)?;
        let teams = ent::Team::find().all(conn).await.map_err(query_failed)?;
        let locations = ent::Location::find().all(conn).await.map_err(query_failed)?;

        let timeslots = ent::Timeslot::find()
            .filter(timeslot::Column::Date.gte(window_start))
            .filter(timeslot::Column::Date.lte(window_end))
            .all(conn)
            .await
            .map_err(query_failed)?;
        let timeslot_ids: Vec<i32> = timeslots.iter().map(|t| t.id).collect();

        let team_availability = ent::TeamAvailability::find()
            .filter(team_availability::Column::TimeslotId.is_in(timeslot_ids.clone()))
            .all(conn)
            .await
            .map_err(query_failed)?;

        let location_availability = ent::LocationAvailability::find()
            .filter(location_availability::Column::TimeslotId.is_in(timeslot_ids))
            .all(conn)
            .await
            .map_err(query_failed)?;

        let recency_start = window_start - Duration::days(i64::from(recent_games_weeks) * 7);
        let previous_games = ent::PreviousGame::find()
            .filter(previous_game::Column::Date.gte(recency_start))
            .filter(previous_game::Column::Date.lt(window_start))
            .all(conn)
            .await
            .map_err(query_failed)?;

        let catalog = pairing_core::Catalog::new(
            divisions
                .into_iter()
                .map(|d| pairing_core::Division { id: d.id, name: d.name })
                .collect(),
            teams
                .into_iter()
                .map(|t| pairing_core::Team {
                    id: t.id,
                    name: t.name,
                    division_id: t.division_id,
                    previous_year_ranking: t.previous_year_ranking,
                })
                .collect(),
            locations
                .into_iter()
                .map(|l| pairing_core::Location { id: l.id, name: l.name })
                .collect(),
            timeslots
                .into_iter()
                .map(|t| pairing_core::Timeslot { id: t.id, date: t.date, modifier: t.modifier })
                .collect(),
            team_availability.into_iter().map(|r| (r.team_id, r.timeslot_id)).collect(),
            location_availability.into_iter().map(|r| (r.location_id, r.timeslot_id)).collect(),
            previous_games
                .into_iter()
                .map(|g| pairing_core::PreviousGame {
                    id: g.id,
                    date: g.date,
                    team_one_id: g.team_one_id,
                    team_two_id: g.team_two_id,
                })
                .collect(),
        );

        catalog.require_nonempty()?;
        log::info!(
            "loaded catalog for {window_start}..={window_end} in {:?}",
            started.elapsed()
        );
        Ok(catalog)
    }
}

fn query_failed(err: DbErr) -> CatalogError {
    CatalogError::Configuration(err.to_string())
}

/// Lets a shared `Client` be handed to a `Facade` without cloning the
/// connection pool; `server` holds one `Arc<Client>` for both routing
/// and health checks.
#[async_trait]
impl CatalogLoader for std::sync::Arc<Client> {
    async fn load(
        &self,
        window_start: NaiveDate,
        window_end: NaiveDate,
        recent_games_weeks: u32,
    ) -> Result<pairing_core::Catalog, CatalogError> {
        (**self).load(window_start, window_end, recent_games_weeks).await
    }
}
