//! Domain model structs and DTOs.
//!
//! Tables keep their Portuguese column names; queries alias them to the
//! English field names used here.

pub mod group;
pub mod report;
pub mod student;
pub mod track;
