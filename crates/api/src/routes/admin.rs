//! Admin routes mounted at `/admin`.
//!
//! Gating happens per handler through the `RequireAdmin` extractor.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin, export};
use crate::state::AppState;

/// ```text
/// GET  /                 -> dashboard
/// POST /criar_eixo       -> create_track
/// POST /excluir_eixo     -> delete_track
/// POST /excluir_aluno    -> delete_student
/// POST /mover_aluno      -> move_student
/// GET  /exportar/excel   -> export_excel
/// GET  /exportar/pdf     -> export_pdf
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::dashboard))
        .route("/criar_eixo", post(admin::create_track))
        .route("/excluir_eixo", post(admin::delete_track))
        .route("/excluir_aluno", post(admin::delete_student))
        .route("/mover_aluno", post(admin::move_student))
        .route("/exportar/excel", get(export::export_excel))
        .route("/exportar/pdf", get(export::export_pdf))
}
