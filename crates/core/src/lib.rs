//! Domain logic for the team registration portal.
//!
//! Everything here is pure: no database, no HTTP. The `db` and `api` crates
//! build on these types and policies.

pub mod assignment;
pub mod error;
pub mod flash;
pub mod naming;
pub mod registration;
pub mod report;
pub mod types;
