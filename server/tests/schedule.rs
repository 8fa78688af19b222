use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use entity::{division, location, location_availability, team, team_availability, timeslot};
use http_body_util::BodyExt;
use sea_orm::{ActiveModelTrait, Database, Set};
use server::config::{DatabaseConfig, ServiceConfig};
use tower::ServiceExt;

/// A fresh, file-backed SQLite database url. `:memory:` is deliberately
/// avoided: sea-orm's connection pool would hand out a distinct, empty
/// in-memory database per connection, so inserts from one connection
/// would be invisible to the app's own pool.
fn temp_db_url(dir: &tempfile::TempDir) -> String {
    let path = dir.path().join("scheduler-test.db");
    format!("sqlite://{}?mode=rwc", path.display())
}

async fn seed(url: &str) {
    let conn = Database::connect(url).await.expect("connect for seeding");

    division::ActiveModel { id: Set(1), name: Set("U10".into()) }
        .insert(&conn)
        .await
        .unwrap();
    team::ActiveModel {
        id: Set(1),
        name: Set("T1".into()),
        division_id: Set(1),
        previous_year_ranking: Set(Some(3)),
    }
    .insert(&conn)
    .await
    .unwrap();
    team::ActiveModel {
        id: Set(2),
        name: Set("T2".into()),
        division_id: Set(1),
        previous_year_ranking: Set(Some(4)),
    }
    .insert(&conn)
    .await
    .unwrap();
    location::ActiveModel { id: Set(1), name: Set("Field 1".into()) }
        .insert(&conn)
        .await
        .unwrap();
    timeslot::ActiveModel {
        id: Set(1),
        date: Set(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()),
        modifier: Set("7pm".into()),
    }
    .insert(&conn)
    .await
    .unwrap();
    team_availability::ActiveModel { team_id: Set(1), timeslot_id: Set(1) }
        .insert(&conn)
        .await
        .unwrap();
    team_availability::ActiveModel { team_id: Set(2), timeslot_id: Set(1) }
        .insert(&conn)
        .await
        .unwrap();
    location_availability::ActiveModel { location_id: Set(1), timeslot_id: Set(1) }
        .insert(&conn)
        .await
        .unwrap();
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok_once_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServiceConfig {
        database: DatabaseConfig { url: temp_db_url(&dir) },
        scheduling: Default::default(),
    };
    let app = server::build_app(&config).await.expect("build app");

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["status"], "ok");
    assert_eq!(value["db"], "ok");
}

#[tokio::test]
async fn schedule_end_to_end_against_a_seeded_database() {
    let dir = tempfile::tempdir().unwrap();
    let url = temp_db_url(&dir);
    let config = ServiceConfig { database: DatabaseConfig { url: url.clone() }, scheduling: Default::default() };

    let app = server::build_app(&config).await.expect("build app");
    seed(&url).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/schedule?start_date=2025-12-01&end_date=2025-12-01&algorithm=greedy")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;

    assert_eq!(value["success"], true);
    let schedule = value["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0]["team_a"], "T1");
    assert_eq!(schedule[0]["team_b"], "T2");
    assert_eq!(schedule[0]["game_id"], 1);
    assert!((schedule[0]["weight"].as_f64().unwrap() - 0.9).abs() < 1e-9);
    assert_eq!(value["metadata"]["algorithm"], "greedy");
    assert!(value["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_window_is_a_successful_empty_schedule() {
    let dir = tempfile::tempdir().unwrap();
    let url = temp_db_url(&dir);
    let config = ServiceConfig { database: DatabaseConfig { url: url.clone() }, scheduling: Default::default() };

    let app = server::build_app(&config).await.expect("build app");
    seed(&url).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/schedule?start_date=2030-01-01&end_date=2030-01-01")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["success"], true);
    assert!(value["schedule"].as_array().unwrap().is_empty());
    assert_eq!(value["warnings"], serde_json::json!(["empty_catalog"]));
}

#[tokio::test]
async fn unknown_algorithm_is_rejected_as_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let url = temp_db_url(&dir);
    let config = ServiceConfig { database: DatabaseConfig { url: url.clone() }, scheduling: Default::default() };

    let app = server::build_app(&config).await.expect("build app");
    seed(&url).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/schedule?start_date=2025-12-01&end_date=2025-12-01&algorithm=bogus")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = body_json(response).await;
    assert_eq!(value["success"], false);
    assert_eq!(value["error"]["kind"], "validation_error");
}
