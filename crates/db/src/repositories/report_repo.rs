//! Roster report query.

use enrollment_core::report::{fold_roster, TrackReport};
use sqlx::PgPool;

use crate::models::report::RosterRecord;

pub struct ReportRepo;

impl ReportRepo {
    /// Load every track with its groups and students in one joined query.
    ///
    /// Tracks and groups come in creation order, students by name.
    pub async fn roster(pool: &PgPool) -> Result<Vec<TrackReport>, sqlx::Error> {
        let rows = sqlx::query_as::<_, RosterRecord>(
            "SELECT e.id AS track_id, e.nome AS track_name, e.descricao AS track_description, \
                    g.id AS group_id, g.nome AS group_name, \
                    a.id AS student_id, a.nome AS student_name, a.email, \
                    a.telefone AS phone, a.curso AS course, a.turno AS shift, \
                    a.periodo AS period \
             FROM eixos e \
             LEFT JOIN grupos g ON g.eixo_id = e.id \
             LEFT JOIN alunos a ON a.grupo_id = g.id \
             ORDER BY e.id, g.id, a.nome, a.id",
        )
        .fetch_all(pool)
        .await?;

        Ok(fold_roster(rows.into_iter().map(Into::into)))
    }
}
