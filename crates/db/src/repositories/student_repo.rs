//! Repository for the `alunos` table.
//!
//! Writes that depend on a group's head count lock the relevant `grupos`
//! rows first, so the count read and the write see the same state even when
//! registrations for the same track arrive concurrently.

use enrollment_core::assignment::{has_free_seat, AssignmentError, GroupOccupancy};
use enrollment_core::types::DbId;
use sqlx::PgPool;

use crate::models::group::OccupancyRow;
use crate::models::student::{CreateStudent, MoveOutcome, RegistrationOutcome, Student};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome AS name, email, telefone AS phone, curso AS course, \
                       turno AS shift, periodo AS period, grupo_id AS group_id";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Register a student into one of the track's groups.
    ///
    /// Inside a single transaction: lock the track's groups, read each group's
    /// total and same-course head counts, let `choose` pick a group, insert.
    /// When `choose` rejects, the transaction is rolled back and nothing is
    /// written.
    pub async fn register<F>(
        pool: &PgPool,
        track_id: DbId,
        input: &CreateStudent,
        choose: F,
    ) -> Result<RegistrationOutcome, sqlx::Error>
    where
        F: FnOnce(&[GroupOccupancy]) -> Result<DbId, AssignmentError>,
    {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT id FROM grupos WHERE eixo_id = $1 ORDER BY id FOR UPDATE")
            .bind(track_id)
            .execute(&mut *tx)
            .await?;

        let occupancy: Vec<GroupOccupancy> = sqlx::query_as::<_, OccupancyRow>(
            "SELECT g.id AS group_id, \
                    COUNT(a.id) AS total, \
                    COUNT(a.id) FILTER (WHERE a.curso IS NOT DISTINCT FROM $2) AS same_course \
             FROM grupos g \
             LEFT JOIN alunos a ON a.grupo_id = g.id \
             WHERE g.eixo_id = $1 \
             GROUP BY g.id \
             ORDER BY g.id",
        )
        .bind(track_id)
        .bind(&input.course)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

        let group_id = match choose(&occupancy) {
            Ok(id) => id,
            Err(err) => {
                tx.rollback().await?;
                return Ok(RegistrationOutcome::Rejected(err));
            }
        };

        let insert = format!(
            "INSERT INTO alunos (nome, email, telefone, curso, turno, periodo, grupo_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let student = sqlx::query_as::<_, Student>(&insert)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.course)
            .bind(&input.shift)
            .bind(input.period)
            .bind(group_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(RegistrationOutcome::Registered(student))
    }

    /// Move a student into `group_id` if that group has a free seat.
    pub async fn move_to_group(
        pool: &PgPool,
        student_id: DbId,
        group_id: DbId,
        capacity: i64,
    ) -> Result<MoveOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let target: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM grupos WHERE id = $1 FOR UPDATE")
                .bind(group_id)
                .fetch_optional(&mut *tx)
                .await?;
        if target.is_none() {
            return Ok(MoveOutcome::GroupNotFound);
        }

        let current: Option<(DbId,)> =
            sqlx::query_as("SELECT grupo_id FROM alunos WHERE id = $1 FOR UPDATE")
                .bind(student_id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((current_group,)) = current else {
            return Ok(MoveOutcome::StudentNotFound);
        };
        if current_group == group_id {
            return Ok(MoveOutcome::Unchanged);
        }

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM alunos WHERE grupo_id = $1")
            .bind(group_id)
            .fetch_one(&mut *tx)
            .await?;
        if !has_free_seat(total, capacity) {
            return Ok(MoveOutcome::GroupFull);
        }

        sqlx::query("UPDATE alunos SET grupo_id = $2 WHERE id = $1")
            .bind(student_id)
            .bind(group_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(MoveOutcome::Moved)
    }

    /// Find a student by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alunos WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Everyone currently in a group, by name.
    pub async fn list_by_group(pool: &PgPool, group_id: DbId) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alunos WHERE grupo_id = $1 ORDER BY nome, id");
        sqlx::query_as::<_, Student>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    /// Number of students in a group.
    pub async fn count_by_group(pool: &PgPool, group_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM alunos WHERE grupo_id = $1")
            .bind(group_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Delete a student. Returns `false` if no such student exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM alunos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
