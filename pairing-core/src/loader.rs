use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::CatalogError;
use crate::model::Catalog;

/// The boundary the optimizer reads its input through. `pairing-core`
/// knows nothing about SQL or any particular store; a separate crate
/// (`db`, in this workspace) implements this against `sea-orm` and hands
/// back the plain [`Catalog`] snapshot.
#[async_trait]
pub trait CatalogLoader: Send + Sync {
    /// Loads every entity needed by a generation over `[window_start,
    /// window_end]`, plus previous games within `recent_games_weeks * 7`
    /// days before `window_start`. The returned catalog is a frozen,
    /// in-memory snapshot; no further I/O happens once this returns.
    async fn load(
        &self,
        window_start: NaiveDate,
        window_end: NaiveDate,
        recent_games_weeks: u32,
    ) -> Result<Catalog, CatalogError>;
}
