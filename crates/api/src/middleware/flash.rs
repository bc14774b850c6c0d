//! One-shot flash messages carried in a cookie across a redirect.
//!
//! Form actions call [`redirect_with_flash`]; the next page reads the code
//! with [`IncomingFlash`] and clears the cookie when it renders.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::SET_COOKIE;
use axum::http::request::Parts;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use enrollment_core::flash::Flash;

use super::cookies::{build_cookie, read_cookie, removal_cookie, FLASH_COOKIE};

/// Flash message left by the previous request, if any.
///
/// Unknown or tampered codes are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncomingFlash(pub Option<Flash>);

impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let flash = read_cookie(&parts.headers, FLASH_COOKIE)
            .as_deref()
            .and_then(Flash::from_code);
        Ok(IncomingFlash(flash))
    }
}

/// 303 redirect to `to` that leaves `flash` for the next page.
pub fn redirect_with_flash(to: &str, flash: Flash, secure: bool) -> Response {
    (
        AppendHeaders([(SET_COOKIE, build_cookie(FLASH_COOKIE, flash.code(), None, secure))]),
        Redirect::to(to),
    )
        .into_response()
}

/// `Set-Cookie` value clearing a consumed flash.
pub fn consumed_flash_cookie() -> String {
    removal_cookie(FLASH_COOKIE)
}
