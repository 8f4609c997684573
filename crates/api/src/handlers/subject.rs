//! Handlers for the `/subjects` resource.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use trainerhub_core::error::CoreError;
use trainerhub_core::patch::Patch;
use trainerhub_core::types::DbId;
use trainerhub_core::validation;
use trainerhub_db::models::subject::{CreateSubject, NewSubject, Subject, UpdateSubject};
use trainerhub_db::repositories::SubjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Payload;
use crate::response::{ApiResponse, NoPayload};
use crate::state::AppState;

/// Payload key for single-subject responses.
#[derive(Debug, Serialize)]
pub struct SubjectPayload {
    pub subject: Subject,
}

fn subject_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::not_found("Subject", id))
}

fn subject_id(path: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    let Path(id) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(id)
}

/// POST /subjects/create/
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<CreateSubject>,
) -> AppResult<(StatusCode, Json<ApiResponse<SubjectPayload>>)> {
    let subject_name = validation::validate_subject_name(input.subject_name.as_deref())?;

    if SubjectRepo::name_exists(&state.pool, &subject_name).await? {
        return Err(CoreError::Validation(format!("Subject '{subject_name}' already exists.")).into());
    }

    let new_subject = NewSubject {
        subject_name,
        description: validation::normalize_optional(input.description.as_deref()),
    };
    let subject = SubjectRepo::create(&state.pool, &new_subject).await?;

    tracing::info!(
        subject_id = subject.subject_id,
        subject_name = %subject.subject_name,
        "Subject created",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(SubjectPayload { subject }).with_message("Subject created successfully!")),
    ))
}

/// GET /subjects/
///
/// Returns a bare JSON array, without the status envelope.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Subject>>> {
    let subjects = SubjectRepo::list(&state.pool).await?;
    Ok(Json(subjects))
}

/// GET /subjects/{subject_id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<ApiResponse<SubjectPayload>>> {
    let id = subject_id(path)?;
    let subject = SubjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| subject_not_found(id))?;
    Ok(Json(ApiResponse::success(SubjectPayload { subject })))
}

/// PUT|POST /subjects/update/{subject_id}/
///
/// Every failure, including an unknown id or a malformed body, is
/// reported as a 500.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Payload<UpdateSubject>, AppError>,
) -> AppResult<Json<ApiResponse<SubjectPayload>>> {
    apply_update(&state, path, payload)
        .await
        .map_err(AppError::into_unexpected)
}

async fn apply_update(
    state: &AppState,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Payload<UpdateSubject>, AppError>,
) -> AppResult<Json<ApiResponse<SubjectPayload>>> {
    let id = subject_id(path)?;
    if SubjectRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(subject_not_found(id));
    }
    let Payload(mut input) = payload?;
    input.description = match input.description {
        Patch::Value(raw) => match validation::normalize_optional(Some(&raw)) {
            Some(description) => Patch::Value(description),
            None => Patch::Null,
        },
        other => other,
    };

    let subject = SubjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| subject_not_found(id))?;

    tracing::info!(subject_id = id, "Subject updated");

    Ok(Json(
        ApiResponse::success(SubjectPayload { subject }).with_message("Subject updated successfully"),
    ))
}

/// DELETE /subjects/delete/{subject_id}/
///
/// Trainers referencing the subject are kept with their subject cleared.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<ApiResponse<NoPayload>>> {
    let id = subject_id(path)?;
    let deletion = SubjectRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| subject_not_found(id))?;

    tracing::info!(
        subject_id = id,
        detached_trainers = deletion.detached_trainers,
        "Subject deleted",
    );

    Ok(Json(ApiResponse::message(format!(
        "Subject '{}' deleted successfully",
        deletion.subject_name
    ))))
}
