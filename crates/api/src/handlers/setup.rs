use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::render_message;

/// GET /setup-db
///
/// Apply the schema migrations. Safe to hit repeatedly.
pub async fn setup_db(State(state): State<AppState>) -> AppResult<Response> {
    match enrollment_db::run_migrations(&state.pool).await {
        Ok(()) => {
            tracing::info!("Database schema ready");
            let page = render_message(
                &state,
                "Banco de dados",
                "Tabelas criadas ou já existentes. Tudo pronto.",
            )?;
            Ok(page.into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, "Schema setup failed");
            let page = render_message(
                &state,
                "Banco de dados",
                "Falha ao preparar o banco de dados.",
            )?;
            Ok((StatusCode::INTERNAL_SERVER_ERROR, page).into_response())
        }
    }
}
