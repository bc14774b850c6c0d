pub mod admin;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                     service + database health (JSON)
///
/// /                           portal: login form, link to registration
/// /aluno                      registration form
/// /inscrever                  submit registration (POST)
/// /login                      admin login (POST)
/// /logout                     admin logout
/// /setup-db                   apply schema migrations
///
/// /admin                      dashboard (admin only)
/// /admin/criar_eixo           create track + groups (POST)
/// /admin/excluir_eixo         delete track (POST)
/// /admin/excluir_aluno        delete student (POST)
/// /admin/mover_aluno          move student to another group (POST)
/// /admin/exportar/excel       roster as .xlsx
/// /admin/exportar/pdf         roster as .pdf
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(public::router())
        .nest("/admin", admin::router())
}
