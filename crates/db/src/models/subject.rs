//! Subject entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trainerhub_core::patch::Patch;
use trainerhub_core::types::{DbId, Timestamp};

/// A row from the `subjects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subject {
    pub subject_id: DbId,
    pub subject_name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Raw payload for creating a subject, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSubject {
    pub subject_name: Option<String>,
    pub description: Option<String>,
}

/// Validated subject ready for insertion.
#[derive(Debug, Clone)]
pub struct NewSubject {
    pub subject_name: String,
    pub description: Option<String>,
}

/// Partial update of a subject. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSubject {
    #[serde(default)]
    pub subject_name: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
}

/// Outcome of deleting a subject.
#[derive(Debug, Clone)]
pub struct SubjectDeletion {
    pub subject_name: String,
    /// Trainers whose subject reference was cleared.
    pub detached_trainers: u64,
}
