//! Request extractors and cookie helpers.
//!
//! - [`admin::RequireAdmin`] -- Requires a valid admin session cookie.
//! - [`flash::IncomingFlash`] -- Reads the one-shot message left by a redirect.
//! - [`cookies`] -- Parsing and building of `Cookie` / `Set-Cookie` headers.

pub mod admin;
pub mod cookies;
pub mod flash;
