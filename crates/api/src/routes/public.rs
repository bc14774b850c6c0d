//! Routes reachable without an admin session.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, portal, registration, setup};
use crate::state::AppState;

/// ```text
/// GET  /           -> home
/// GET  /aluno      -> registration_form
/// POST /inscrever  -> register
/// POST /login      -> login
/// GET  /logout     -> logout
/// GET  /setup-db   -> setup_db
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(portal::home))
        .route("/aluno", get(portal::registration_form))
        .route("/inscrever", post(registration::register))
        .route("/login", post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/setup-db", get(setup::setup_db))
}
