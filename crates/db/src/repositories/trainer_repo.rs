//! Repository for the `trainers` table.
//!
//! Every read joins `subjects` so the returned [`Trainer`] carries the
//! subject's display name.

use sqlx::{PgConnection, PgPool};
use trainerhub_core::trainer_code;

use crate::models::trainer::{NewTrainer, Trainer, TrainerChanges};

/// Trainer columns plus the joined subject name, for a `t`/`s` aliased query.
const COLUMNS: &str = "t.trainer_code, t.name, t.email, t.phone, t.subject_id, \
                       s.subject_name, t.created_at, t.updated_at";

/// Key for the transaction-scoped advisory lock that serializes code allocation.
const CODE_ALLOCATION_LOCK: i64 = 0x5452_4149_4E45_52;

/// Provides CRUD operations for trainers.
pub struct TrainerRepo;

impl TrainerRepo {
    /// Insert a new trainer under the next free trainer code.
    ///
    /// Allocation and insert share one transaction holding an advisory
    /// lock, so concurrent creations never compute the same code.
    pub async fn create(pool: &PgPool, input: &NewTrainer) -> Result<Trainer, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(CODE_ALLOCATION_LOCK)
            .execute(&mut *tx)
            .await?;

        let last = Self::last_code(&mut tx).await?;
        let code = trainer_code::next_code(last.as_deref())
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        let query = format!(
            "WITH t AS (
                INSERT INTO trainers (trainer_code, name, email, phone, subject_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
             )
             SELECT {COLUMNS} FROM t LEFT JOIN subjects s ON s.subject_id = t.subject_id"
        );
        let trainer = sqlx::query_as::<_, Trainer>(&query)
            .bind(&code)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.subject_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(trainer)
    }

    /// Find a trainer by code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Trainer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trainers t
             LEFT JOIN subjects s ON s.subject_id = t.subject_id
             WHERE t.trainer_code = $1"
        );
        sqlx::query_as::<_, Trainer>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Whether `email` belongs to a trainer other than `except_code`.
    pub async fn email_taken(
        pool: &PgPool,
        email: &str,
        except_code: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM trainers
                WHERE email = $1 AND ($2::VARCHAR IS NULL OR trainer_code <> $2)
             )",
        )
        .bind(email)
        .bind(except_code)
        .fetch_one(pool)
        .await
    }

    /// Total number of trainers.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM trainers")
            .fetch_one(pool)
            .await
    }

    /// One page of trainers ordered numerically by code (`T99` before `T100`).
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Trainer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trainers t
             LEFT JOIN subjects s ON s.subject_id = t.subject_id
             ORDER BY char_length(t.trainer_code) ASC, t.trainer_code ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Trainer>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Apply validated changes and refresh `updated_at`.
    ///
    /// Returns `None` if no trainer has the given code.
    pub async fn update(
        pool: &PgPool,
        code: &str,
        changes: &TrainerChanges,
    ) -> Result<Option<Trainer>, sqlx::Error> {
        let query = format!(
            "WITH t AS (
                UPDATE trainers SET
                    name = COALESCE($2, name),
                    email = CASE WHEN $3::BOOLEAN THEN $4::VARCHAR ELSE email END,
                    phone = CASE WHEN $5::BOOLEAN THEN $6::VARCHAR ELSE phone END,
                    subject_id = CASE WHEN $7::BOOLEAN THEN $8::BIGINT ELSE subject_id END,
                    updated_at = NOW()
                WHERE trainer_code = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM t LEFT JOIN subjects s ON s.subject_id = t.subject_id"
        );
        sqlx::query_as::<_, Trainer>(&query)
            .bind(code)
            .bind(&changes.name)
            .bind(changes.email.is_set())
            .bind(changes.email.value())
            .bind(changes.phone.is_set())
            .bind(changes.phone.value())
            .bind(changes.subject_id.is_set())
            .bind(changes.subject_id.value().copied())
            .fetch_optional(pool)
            .await
    }

    /// Delete a trainer by code. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trainers WHERE trainer_code = $1")
            .bind(code)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Highest allocated code, compared numerically.
    ///
    /// Allocated codes carry no padding beyond two digits, so a longer code
    /// is always a larger number and equal-length codes sort as text.
    async fn last_code(conn: &mut PgConnection) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT trainer_code FROM trainers
             ORDER BY char_length(trainer_code) DESC, trainer_code DESC
             LIMIT 1",
        )
        .fetch_optional(conn)
        .await
    }
}
