//! `Cookie` / `Set-Cookie` header helpers.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use cookie::time::Duration;
use cookie::{Cookie, SameSite};

/// Name of the cookie holding the admin session token.
pub const SESSION_COOKIE: &str = "admin_session";
/// Name of the cookie holding a pending flash code.
pub const FLASH_COOKIE: &str = "flash";

/// Find the value of cookie `name` across all `Cookie` request headers.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

/// `Set-Cookie` value for an `HttpOnly`, `SameSite=Lax` cookie on `/`.
///
/// `max_age_secs` of `None` makes it a browser-session cookie.
pub fn build_cookie(name: &str, value: &str, max_age_secs: Option<i64>, secure: bool) -> String {
    let mut builder = Cookie::build((name.to_string(), value.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure);
    if let Some(secs) = max_age_secs {
        builder = builder.max_age(Duration::seconds(secs));
    }
    builder.build().to_string()
}

/// `Set-Cookie` value that makes the browser drop cookie `name`.
pub fn removal_cookie(name: &str) -> String {
    Cookie::build((name.to_string(), String::new()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .build()
        .to_string()
}
