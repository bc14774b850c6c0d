//! Public landing and registration form pages.

use axum::extract::State;
use axum::response::Response;
use enrollment_core::assignment::GROUP_CAPACITY;
use enrollment_db::repositories::TrackRepo;
use tera::Context;

use crate::error::AppResult;
use crate::middleware::flash::IncomingFlash;
use crate::state::AppState;
use crate::views::{render_page, PORTAL, REGISTRATION};

/// GET /
///
/// Portal with the admin login form and the link to registration.
pub async fn home(State(state): State<AppState>, flash: IncomingFlash) -> AppResult<Response> {
    render_page(&state, PORTAL, Context::new(), flash)
}

/// GET /aluno
///
/// Registration form. Tracks without a free seat are listed but disabled.
pub async fn registration_form(
    State(state): State<AppState>,
    flash: IncomingFlash,
) -> AppResult<Response> {
    let tracks = TrackRepo::list_with_availability(&state.pool, GROUP_CAPACITY).await?;

    let mut context = Context::new();
    context.insert("tracks", &tracks);
    render_page(&state, REGISTRATION, context, flash)
}
