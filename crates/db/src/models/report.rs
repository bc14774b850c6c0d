//! Flat roster row backing the admin report.

use enrollment_core::report::RosterRow;
use enrollment_core::types::DbId;
use sqlx::FromRow;

/// One row of `eixos LEFT JOIN grupos LEFT JOIN alunos`.
#[derive(Debug, Clone, FromRow)]
pub struct RosterRecord {
    pub track_id: DbId,
    pub track_name: String,
    pub track_description: Option<String>,
    pub group_id: Option<DbId>,
    pub group_name: Option<String>,
    pub student_id: Option<DbId>,
    pub student_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub shift: Option<String>,
    pub period: Option<i32>,
}

impl From<RosterRecord> for RosterRow {
    fn from(r: RosterRecord) -> Self {
        RosterRow {
            track_id: r.track_id,
            track_name: r.track_name,
            track_description: r.track_description,
            group_id: r.group_id,
            group_name: r.group_name,
            student_id: r.student_id,
            student_name: r.student_name,
            email: r.email,
            phone: r.phone,
            course: r.course,
            shift: r.shift,
            period: r.period,
        }
    }
}
