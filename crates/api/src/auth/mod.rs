//! Admin authentication primitives.
//!
//! - [`password`] -- constant-time check of the shared admin password.
//! - [`jwt`] -- signed session tokens carried in the admin cookie.

pub mod jwt;
pub mod password;
