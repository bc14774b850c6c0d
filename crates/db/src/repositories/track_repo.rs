//! Repository for the `eixos` table.

use sqlx::PgPool;
use enrollment_core::types::DbId;

use crate::models::group::Group;
use crate::models::track::{CreateTrack, Track, TrackAvailability, TrackOccupancyRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome AS name, descricao AS description";

/// Provides CRUD operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a track and its groups in one transaction.
    ///
    /// Either the track and every group exist afterwards, or none of them do.
    pub async fn create_with_groups(
        pool: &PgPool,
        input: &CreateTrack,
        group_names: &[String],
    ) -> Result<(Track, Vec<Group>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_track = format!(
            "INSERT INTO eixos (nome, descricao) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let track = sqlx::query_as::<_, Track>(&insert_track)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        let mut groups = Vec::with_capacity(group_names.len());
        for name in group_names {
            let group = sqlx::query_as::<_, Group>(
                "INSERT INTO grupos (nome, eixo_id) VALUES ($1, $2) \
                 RETURNING id, nome AS name, eixo_id AS track_id",
            )
            .bind(name)
            .bind(track.id)
            .fetch_one(&mut *tx)
            .await?;
            groups.push(group);
        }

        tx.commit().await?;
        Ok((track, groups))
    }

    /// Find a track by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM eixos WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tracks in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM eixos ORDER BY id");
        sqlx::query_as::<_, Track>(&query).fetch_all(pool).await
    }

    /// List all tracks with their open-group counts for the registration form.
    ///
    /// Head counts are aggregated per group in one query; whether a track is
    /// full is decided by the assignment module's predicate.
    pub async fn list_with_availability(
        pool: &PgPool,
        capacity: i64,
    ) -> Result<Vec<TrackAvailability>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TrackOccupancyRow>(
            "SELECT e.id, e.nome AS name, e.descricao AS description, \
                    COALESCE( \
                        ARRAY_AGG(COALESCE(c.total, 0) ORDER BY g.id) FILTER (WHERE g.id IS NOT NULL), \
                        '{}'::BIGINT[] \
                    ) AS group_totals \
             FROM eixos e \
             LEFT JOIN grupos g ON g.eixo_id = e.id \
             LEFT JOIN ( \
                 SELECT grupo_id, COUNT(*) AS total FROM alunos GROUP BY grupo_id \
             ) c ON c.grupo_id = g.id \
             GROUP BY e.id \
             ORDER BY e.id",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| TrackAvailability::from_occupancy(row, capacity))
            .collect())
    }

    /// Delete a track. Its groups and their students go with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM eixos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
