//! Trainer entity model and DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trainerhub_core::patch::Patch;
use trainerhub_core::subject_ref::SubjectRef;
use trainerhub_core::types::{DbId, Timestamp};

/// A row from the `trainers` table joined with its subject's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trainer {
    pub trainer_code: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "subject")]
    pub subject_id: Option<DbId>,
    /// Denormalized from `subjects`; rendered by the API layer.
    #[serde(skip_serializing)]
    pub subject_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Trainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.trainer_code)
    }
}

/// Raw payload for creating a trainer, before validation.
///
/// The trainer code is never accepted from clients.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTrainer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<SubjectRef>,
}

/// Validated trainer ready for insertion. The code is allocated on insert.
#[derive(Debug, Clone)]
pub struct NewTrainer {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject_id: Option<DbId>,
}

/// Raw partial update of a trainer, keyed by trainer code in the URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTrainer {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub email: Patch<String>,
    #[serde(default)]
    pub phone: Patch<String>,
    #[serde(default)]
    pub subject: Patch<SubjectRef>,
}

/// Validated field changes for a trainer.
///
/// `Patch::Null` clears a nullable column; `name` can only be set.
#[derive(Debug, Clone, Default)]
pub struct TrainerChanges {
    pub name: Option<String>,
    pub email: Patch<String>,
    pub phone: Patch<String>,
    pub subject_id: Patch<DbId>,
}
