//! Roster report shaping.
//!
//! The database hands back one flat row per (track, group, student) triple,
//! with `None` where a track has no groups or a group has no students. This
//! module folds those rows into the nested track -> group -> student tree used
//! by the dashboard and the exports, and flattens the tree again into
//! spreadsheet rows.

use serde::Serialize;

use crate::assignment::GROUP_CAPACITY;
use crate::types::DbId;

/// Substitute for any missing field in exported output.
pub const PLACEHOLDER: &str = "-";
/// Shown under a group with nobody in it.
pub const EMPTY_GROUP: &str = "Sem alunos";
/// Shown under a track with no groups.
pub const EMPTY_TRACK: &str = "Sem equipes";

/// Spreadsheet column headers, in export order.
pub const EXPORT_HEADERS: [&str; 7] = [
    "Eixo", "Equipe", "Nome", "Email", "Curso", "Turno", "Período",
];

/// One row of the track/group/student outer join, ordered by track, group, student.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterRow {
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentSummary {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub shift: Option<String>,
    pub period: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    pub id: DbId,
    pub name: String,
    pub total: usize,
    pub is_full: bool,
    pub students: Vec<StudentSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackReport {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub groups: Vec<GroupReport>,
}

impl TrackReport {
    pub fn student_count(&self) -> usize {
        self.groups.iter().map(|g| g.total).sum()
    }
}

/// A flat spreadsheet line, placeholders already substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub track: String,
    pub group: String,
    pub name: String,
    pub email: String,
    pub course: String,
    pub shift: String,
    pub period: String,
}

impl ExportRow {
    pub fn cells(&self) -> [&str; 7] {
        [
            self.track.as_str(),
            self.group.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.course.as_str(),
            self.shift.as_str(),
            self.period.as_str(),
        ]
    }
}

/// Fold ordered outer-join rows into the nested report.
///
/// Rows must be sorted by track id, then group id. Consecutive rows sharing a
/// track (or group) id are merged.
pub fn fold_roster<I>(rows: I) -> Vec<TrackReport>
where
    I: IntoIterator<Item = RosterRow>,
{
    let mut tracks: Vec<TrackReport> = Vec::new();

    for row in rows {
        if tracks.last().map(|t| t.id) != Some(row.track_id) {
            tracks.push(TrackReport {
                id: row.track_id,
                name: row.track_name.clone(),
                description: row.track_description.clone(),
                groups: Vec::new(),
            });
        }
        let Some(track) = tracks.last_mut() else {
            continue;
        };

        let Some(group_id) = row.group_id else {
            continue;
        };
        if track.groups.last().map(|g| g.id) != Some(group_id) {
            track.groups.push(GroupReport {
                id: group_id,
                name: row.group_name.clone().unwrap_or_default(),
                total: 0,
                is_full: false,
                students: Vec::new(),
            });
        }
        let Some(group) = track.groups.last_mut() else {
            continue;
        };

        if let Some(student_id) = row.student_id {
            group.students.push(StudentSummary {
                id: student_id,
                name: row.student_name.unwrap_or_default(),
                email: row.email,
                phone: row.phone,
                course: row.course,
                shift: row.shift,
                period: row.period,
            });
        }
    }

    for group in tracks.iter_mut().flat_map(|t| t.groups.iter_mut()) {
        group.total = group.students.len();
        group.is_full = group.total as i64 >= GROUP_CAPACITY;
    }

    tracks
}

/// Flatten the report into one export row per student.
pub fn export_rows(tracks: &[TrackReport]) -> Vec<ExportRow> {
    tracks
        .iter()
        .flat_map(|track| {
            track.groups.iter().flat_map(move |group| {
                group.students.iter().map(move |s| ExportRow {
                    track: or_placeholder(Some(track.name.as_str())).to_string(),
                    group: or_placeholder(Some(group.name.as_str())).to_string(),
                    name: or_placeholder(Some(s.name.as_str())).to_string(),
                    email: or_placeholder(s.email.as_deref()).to_string(),
                    course: or_placeholder(s.course.as_deref()).to_string(),
                    shift: or_placeholder(s.shift.as_deref()).to_string(),
                    period: s
                        .period
                        .map(|p| p.to_string())
                        .unwrap_or_else(|| PLACEHOLDER.to_string()),
                })
            })
        })
        .collect()
}

/// The value itself, or [`PLACEHOLDER`] when absent or blank.
pub fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => PLACEHOLDER,
    }
}
