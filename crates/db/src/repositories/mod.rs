//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod group_repo;
pub mod report_repo;
pub mod student_repo;
pub mod track_repo;

pub use group_repo::GroupRepo;
pub use report_repo::ReportRepo;
pub use student_repo::StudentRepo;
pub use track_repo::TrackRepo;
