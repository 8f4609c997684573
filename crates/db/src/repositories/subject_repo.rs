//! Repository for the `subjects` table.

use sqlx::PgPool;
use trainerhub_core::types::DbId;

use crate::models::subject::{NewSubject, Subject, SubjectDeletion, UpdateSubject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "subject_id, subject_name, description, created_at, updated_at";

/// Provides CRUD operations for subjects.
pub struct SubjectRepo;

impl SubjectRepo {
    /// Insert a new subject, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewSubject) -> Result<Subject, sqlx::Error> {
        let query = format!(
            "INSERT INTO subjects (subject_name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(&input.subject_name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a subject by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects WHERE subject_id = $1");
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a subject with this name exists, ignoring case.
    pub async fn name_exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM subjects WHERE LOWER(subject_name) = LOWER($1))",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// List every subject ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects ORDER BY subject_id ASC");
        sqlx::query_as::<_, Subject>(&query).fetch_all(pool).await
    }

    /// Apply a partial update. `updated_at` is refreshed even when no
    /// field is supplied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSubject,
    ) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!(
            "UPDATE subjects SET
                subject_name = CASE WHEN $2::BOOLEAN THEN $3::VARCHAR ELSE subject_name END,
                description = CASE WHEN $4::BOOLEAN THEN $5::TEXT ELSE description END,
                updated_at = NOW()
             WHERE subject_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .bind(input.subject_name.is_set())
            .bind(input.subject_name.value())
            .bind(input.description.is_set())
            .bind(input.description.value())
            .fetch_optional(pool)
            .await
    }

    /// Delete a subject, first clearing the reference on every trainer
    /// that points at it. Trainers themselves are never deleted.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<SubjectDeletion>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let detached = sqlx::query("UPDATE trainers SET subject_id = NULL WHERE subject_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let subject_name: Option<String> = sqlx::query_scalar(
            "DELETE FROM subjects WHERE subject_id = $1 RETURNING subject_name",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(subject_name) = subject_name else {
            return Ok(None);
        };

        tx.commit().await?;

        if detached > 0 {
            tracing::debug!(subject_id = id, detached, "Cleared subject on trainers");
        }

        Ok(Some(SubjectDeletion {
            subject_name,
            detached_trainers: detached,
        }))
    }
}
