//! Admin gate extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Response;
use enrollment_core::flash::Flash;

use super::cookies::{read_cookie, SESSION_COOKIE};
use super::flash::redirect_with_flash;
use crate::auth::jwt::{validate_session_token, Claims, ROLE_ADMIN};
use crate::state::AppState;

/// Proof that the request carries a valid admin session cookie.
///
/// Requests without one are redirected to the portal with an
/// "access denied" flash instead of receiving an HTTP error.
///
/// ```ignore
/// async fn dashboard(RequireAdmin(claims): RequireAdmin) -> AppResult<Html<String>> {
///     tracing::debug!(jti = %claims.jti, "admin request");
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub Claims);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let deny = || redirect_with_flash("/", Flash::AccessDenied, state.config.session.secure_cookies);

        let Some(token) = read_cookie(&parts.headers, SESSION_COOKIE) else {
            tracing::debug!(path = %parts.uri.path(), "Admin route without session cookie");
            return Err(deny());
        };

        let claims = validate_session_token(&token, &state.config.session).map_err(|e| {
            tracing::warn!(path = %parts.uri.path(), error = %e, "Rejected admin session token");
            deny()
        })?;

        if claims.role != ROLE_ADMIN {
            tracing::warn!(role = %claims.role, "Session token without admin role");
            return Err(deny());
        }

        Ok(RequireAdmin(claims))
    }
}
