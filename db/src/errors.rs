use sea_orm::DbErr;
use thiserror::Error;

/// Failure modes of establishing and preparing a database connection.
/// Kept distinct from the catalog-query errors raised once a connection
/// is already live (those surface as `pairing_core::CatalogError`).
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("could not connect to the database: {0}")]
    Connect(#[from] DbErr),

    #[error("database did not respond to ping")]
    Ping,

    #[error("failed to run pending migrations: {0}")]
    Migrate(DbErr),
}
