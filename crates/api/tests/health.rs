//! Integration tests for the health check, schema bootstrap and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["database_reachable"], true);
    assert_eq!(json["schema"], "ready");
}

#[sqlx::test(migrations = false)]
async fn health_reports_missing_schema_until_setup(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["database_reachable"], true);
    assert_eq!(json["schema"], "missing");

    let response = get(app.clone(), "/setup-db").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["schema"], "ready");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/nao-existe").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn setup_db_is_idempotent(pool: PgPool) {
    let app = common::build_test_app(pool);

    for _ in 0..2 {
        let response = get(app.clone(), "/setup-db").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Tudo pronto"));
    }
}
