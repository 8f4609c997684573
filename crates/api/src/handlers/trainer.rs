//! Handlers for trainers.
//!
//! Trainers are addressed by their allocated trainer code (`T01`, ...),
//! never by an internal id.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sqlx::PgPool;
use trainerhub_core::error::CoreError;
use trainerhub_core::pagination::PageWindow;
use trainerhub_core::patch::Patch;
use trainerhub_core::subject_ref::{SubjectRef, INVALID_SUBJECT_MESSAGE};
use trainerhub_core::types::DbId;
use trainerhub_core::validation;
use trainerhub_db::models::trainer::{
    CreateTrainer, NewTrainer, Trainer, TrainerChanges, UpdateTrainer,
};
use trainerhub_db::repositories::{SubjectRepo, TrainerRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Payload;
use crate::query::PageParams;
use crate::response::{ApiResponse, NoPayload};
use crate::state::AppState;

/// Display value for `subject_name` when a trainer has no subject.
pub const NO_SUBJECT_PLACEHOLDER: &str = "-";

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// A trainer with its subject's display name alongside the row fields.
#[derive(Debug, Serialize)]
pub struct TrainerBody<'a> {
    #[serde(flatten)]
    pub trainer: &'a Trainer,
    pub subject_name: Option<&'a str>,
}

impl<'a> TrainerBody<'a> {
    /// `subject_name` falls back to [`NO_SUBJECT_PLACEHOLDER`].
    pub fn with_placeholder(trainer: &'a Trainer) -> Self {
        Self {
            trainer,
            subject_name: Some(
                trainer
                    .subject_name
                    .as_deref()
                    .unwrap_or(NO_SUBJECT_PLACEHOLDER),
            ),
        }
    }

    /// `subject_name` is `null` when there is no subject.
    pub fn without_placeholder(trainer: &'a Trainer) -> Self {
        Self {
            trainer,
            subject_name: trainer.subject_name.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TrainerPayload<'a> {
    pub trainer: TrainerBody<'a>,
}

#[derive(Debug, Serialize)]
pub struct TrainerPage<'a> {
    pub trainers: Vec<TrainerBody<'a>>,
    pub page: i64,
    pub total_pages: i64,
    pub total_trainers: i64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn trainer_not_found(code: &str) -> AppError {
    AppError::Core(CoreError::not_found("Trainer", code))
}

/// Resolve a subject reference, rejecting ids that do not exist.
async fn resolve_subject(pool: &PgPool, subject: SubjectRef) -> AppResult<Option<DbId>> {
    let Some(id) = subject.into_id()? else {
        return Ok(None);
    };
    if SubjectRepo::find_by_id(pool, id).await?.is_none() {
        return Err(CoreError::Validation(INVALID_SUBJECT_MESSAGE.to_string()).into());
    }
    Ok(Some(id))
}

/// Reject an email already used by a trainer other than `except_code`.
async fn ensure_email_available(
    pool: &PgPool,
    email: &str,
    except_code: Option<&str>,
) -> AppResult<()> {
    if TrainerRepo::email_taken(pool, email, except_code).await? {
        return Err(CoreError::Validation(format!("Email '{email}' already exists")).into());
    }
    Ok(())
}

/// Validate a create payload field by field: name, email, phone, subject.
async fn validate_create_input(pool: &PgPool, input: CreateTrainer) -> AppResult<NewTrainer> {
    let name = validation::validate_trainer_name(input.name.as_deref().unwrap_or_default())?;

    let email = match input.email.as_deref() {
        Some(raw) => validation::validate_email(raw)?,
        None => None,
    };
    if let Some(email) = email.as_deref() {
        ensure_email_available(pool, email, None).await?;
    }

    let phone = match input.phone.as_deref() {
        Some(raw) => validation::validate_phone_on_create(raw)?,
        None => None,
    };

    let subject_id = match input.subject {
        Some(subject) => resolve_subject(pool, subject).await?,
        None => None,
    };

    Ok(NewTrainer {
        name,
        email,
        phone,
        subject_id,
    })
}

/// Validate a partial update. Only fields present in the payload are
/// checked; the first failing field aborts the update.
async fn validate_update_input(
    pool: &PgPool,
    code: &str,
    input: UpdateTrainer,
) -> AppResult<TrainerChanges> {
    let name = match input.name {
        Patch::Absent => None,
        Patch::Null => Some(validation::validate_trainer_name("")?),
        Patch::Value(raw) => Some(validation::validate_trainer_name(&raw)?),
    };

    let email = match input.email {
        Patch::Absent => Patch::Absent,
        Patch::Null => Patch::Null,
        Patch::Value(raw) => match validation::validate_email(&raw)? {
            Some(email) => {
                ensure_email_available(pool, &email, Some(code)).await?;
                Patch::Value(email)
            }
            None => Patch::Null,
        },
    };

    let phone = input
        .phone
        .try_map(|raw| validation::validate_phone_on_update(&raw))?;

    let subject_id = match input.subject {
        Patch::Absent => Patch::Absent,
        Patch::Null => Patch::Null,
        Patch::Value(subject) => match resolve_subject(pool, subject).await? {
            Some(id) => Patch::Value(id),
            None => Patch::Null,
        },
    };

    Ok(TrainerChanges {
        name,
        email,
        phone,
        subject_id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /trainer/create/
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<CreateTrainer>,
) -> AppResult<Response> {
    let new_trainer = validate_create_input(&state.pool, input).await?;
    let trainer = TrainerRepo::create(&state.pool, &new_trainer).await?;

    tracing::info!(
        trainer_code = %trainer.trainer_code,
        subject_id = ?trainer.subject_id,
        "Trainer created",
    );

    let body = ApiResponse::success(TrainerPayload {
        trainer: TrainerBody::with_placeholder(&trainer),
    })
    .with_message("Trainer created successfully!");
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// GET /trainers/?page=&page_size=
///
/// Trainers are ordered by code; each carries its subject's display name.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let total = TrainerRepo::count(&state.pool).await?;
    let window = PageWindow::resolve(params.page(), params.page_size(), total)?;
    let trainers = TrainerRepo::list_page(&state.pool, window.limit(), window.offset()).await?;

    let body = ApiResponse::success(TrainerPage {
        trainers: trainers.iter().map(TrainerBody::with_placeholder).collect(),
        page: window.page,
        total_pages: window.total_pages,
        total_trainers: window.total,
    });
    Ok(Json(body).into_response())
}

/// PUT|POST /trainer/update/{trainer_code}/
///
/// An unknown code is reported before the body is looked at.
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    payload: Result<Payload<UpdateTrainer>, AppError>,
) -> AppResult<Response> {
    if TrainerRepo::find_by_code(&state.pool, &code).await?.is_none() {
        return Err(trainer_not_found(&code));
    }
    let Payload(input) = payload?;

    let changes = validate_update_input(&state.pool, &code, input).await?;
    let trainer = TrainerRepo::update(&state.pool, &code, &changes)
        .await?
        .ok_or_else(|| trainer_not_found(&code))?;

    tracing::info!(trainer = %trainer, "Trainer updated");

    let body = ApiResponse::success(TrainerPayload {
        trainer: TrainerBody::without_placeholder(&trainer),
    })
    .with_message(format!("Trainer '{code}' updated successfully"));
    Ok(Json(body).into_response())
}

/// DELETE /trainer/delete/{trainer_code}/
pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<ApiResponse<NoPayload>>> {
    if !TrainerRepo::delete(&state.pool, &code).await? {
        return Err(trainer_not_found(&code));
    }

    tracing::info!(trainer_code = %code, "Trainer deleted");

    Ok(Json(ApiResponse::message(format!(
        "Trainer '{code}' deleted successfully"
    ))))
}
