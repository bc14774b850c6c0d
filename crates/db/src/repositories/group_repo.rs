//! Repository for the `grupos` table.

use sqlx::PgPool;
use enrollment_core::types::DbId;

use crate::models::group::{Group, GroupWithTrack};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome AS name, eixo_id AS track_id";

/// Provides read operations for groups. Groups are created with their track.
pub struct GroupRepo;

impl GroupRepo {
    /// Find a group by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Group>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grupos WHERE id = $1");
        sqlx::query_as::<_, Group>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the groups of a track in creation order.
    pub async fn list_by_track(pool: &PgPool, track_id: DbId) -> Result<Vec<Group>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grupos WHERE eixo_id = $1 ORDER BY id");
        sqlx::query_as::<_, Group>(&query)
            .bind(track_id)
            .fetch_all(pool)
            .await
    }

    /// Every group joined with its track name and current head count.
    pub async fn list_with_track(pool: &PgPool) -> Result<Vec<GroupWithTrack>, sqlx::Error> {
        sqlx::query_as::<_, GroupWithTrack>(
            "SELECT g.id, g.nome AS name, e.id AS track_id, e.nome AS track_name, \
                    COUNT(a.id) AS total \
             FROM grupos g \
             JOIN eixos e ON e.id = g.eixo_id \
             LEFT JOIN alunos a ON a.grupo_id = g.id \
             GROUP BY g.id, e.id \
             ORDER BY e.id, g.id",
        )
        .fetch_all(pool)
        .await
    }
}
