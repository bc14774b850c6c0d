//! Handlers for admin login and logout.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::Form;
use enrollment_core::flash::Flash;
use serde::Deserialize;

use crate::auth::jwt::issue_session_token;
use crate::auth::password::verify_admin_password;
use crate::error::{AppError, AppResult};
use crate::middleware::cookies::{build_cookie, removal_cookie, SESSION_COOKIE};
use crate::middleware::flash::redirect_with_flash;
use crate::state::AppState;

/// Form body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(rename = "senha", default)]
    pub password: String,
}

/// POST /login
///
/// Check the shared admin password. On success set the session cookie and
/// go to the dashboard; otherwise back to the portal with a flash.
pub async fn login(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> AppResult<Response> {
    let session = &state.config.session;

    let input = match form {
        Ok(Form(input)) => input,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable login form");
            return Ok(redirect_with_flash("/", Flash::InvalidForm, session.secure_cookies));
        }
    };

    if !verify_admin_password(&input.password, &session.admin_password) {
        tracing::warn!("Admin login failed: wrong password");
        return Ok(redirect_with_flash("/", Flash::WrongPassword, session.secure_cookies));
    }

    let token = issue_session_token(session)
        .map_err(|e| AppError::InternalError(format!("Failed to issue session token: {e}")))?;

    tracing::info!("Admin logged in");

    let cookie = build_cookie(
        SESSION_COOKIE,
        &token,
        Some(session.max_age_secs()),
        session.secure_cookies,
    );
    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to("/admin")).into_response())
}

/// GET /logout
///
/// Drop the session cookie. Safe to call without being logged in.
pub async fn logout() -> Response {
    tracing::info!("Admin logged out");
    (
        AppendHeaders([(SET_COOKIE, removal_cookie(SESSION_COOKIE))]),
        Redirect::to("/"),
    )
        .into_response()
}
