use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use pairing_core::{Algorithm, Facade};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub facade: Arc<Facade<Arc<db::Client>>>,
    pub db: Arc<db::Client>,
    /// `scheduling.default_algorithm` from the configuration document,
    /// used when the `algorithm` query parameter is omitted.
    pub default_algorithm: Algorithm,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    start_date: String,
    end_date: String,
    algorithm: Option<String>,
}

#[derive(Serialize)]
struct ScheduleResponse {
    success: bool,
    #[serde(flatten)]
    result: pairing_core::GenerationResult,
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation(format!("{field} is not a valid YYYY-MM-DD date: {raw}")))
}

pub async fn schedule(
    State(state): State<AppState>,
    Query(params): Query<ScheduleQuery>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    let start_date = parse_date("start_date", &params.start_date)?;
    let end_date = parse_date("end_date", &params.end_date)?;
    let algorithm = params.algorithm.unwrap_or_else(|| state.default_algorithm.to_string());

    let result = state.facade.generate(start_date, end_date, &algorithm).await?;

    Ok(Json(ScheduleResponse { success: true, result }))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let db_status = if state.db.is_healthy().await { "ok" } else { "fail" };
    Json(json!({ "status": "ok", "db": db_status }))
}
