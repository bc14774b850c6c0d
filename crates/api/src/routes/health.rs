//! Liveness and schema readiness.
//!
//! `GET /health` always answers 200 so load balancers can tell a running
//! process from a dead one; `status` is `ok` only when the database answers
//! and the portal tables exist.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaState {
    Ready,
    /// Reachable database without the portal tables. `/setup-db` fixes it.
    Missing,
    /// The database could not be asked.
    Unknown,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub database_reachable: bool,
    pub schema: SchemaState,
}

impl HealthReport {
    fn new(database_reachable: bool, schema: SchemaState) -> Self {
        let status = match (&schema, database_reachable) {
            (SchemaState::Ready, true) => "ok",
            _ => "degraded",
        };
        HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database_reachable,
            schema,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let report = match enrollment_db::schema_ready(&state.pool).await {
        Ok(true) => HealthReport::new(true, SchemaState::Ready),
        Ok(false) => HealthReport::new(true, SchemaState::Missing),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            HealthReport::new(false, SchemaState::Unknown)
        }
    };
    if report.status != "ok" {
        tracing::debug!(schema = ?report.schema, "Reporting degraded health");
    }
    Json(report)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
