//! HTTP-level integration tests for the subject endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_form, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_subject_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/subjects/create/",
        serde_json::json!({"subject_name": "  Math ", "description": "Numbers"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Subject created successfully!");
    assert_eq!(json["subject"]["subject_name"], "Math");
    assert_eq!(json["subject"]["description"], "Numbers");
    assert!(json["subject"]["subject_id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_subject_from_form(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_form(app, "/subjects/create/", "subject_name=Physics&description=").await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["subject"]["subject_name"], "Physics");
    assert!(json["subject"]["description"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_subject_requires_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/subjects/create/",
        serde_json::json!({"subject_name": "   "}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Subject name is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_subject_name_ignores_case(pool: PgPool) {
    common::create_subject(&pool, "Math").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/subjects/create/",
        serde_json::json!({"subject_name": "MATH"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Subject 'MATH' already exists.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response =
        common::post_raw(app, "/subjects/create/", "application/json", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid JSON format");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_subjects_returns_bare_array(pool: PgPool) {
    common::create_subject(&pool, "Math").await;
    common::create_subject(&pool, "Art").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/subjects/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let subjects = json.as_array().expect("subject listing is a bare array");
    let names: Vec<_> = subjects.iter().map(|s| s["subject_name"].clone()).collect();
    assert_eq!(names, ["Math", "Art"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_subjects_rejects_post(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/subjects/", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await["status"], "error");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_subject_by_id(pool: PgPool) {
    let id = common::create_subject(&pool, "Math").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/subjects/{id}/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["subject"]["subject_name"], "Math");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_subject_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/subjects/999999/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_subject_is_partial(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/subjects/create/",
            serde_json::json!({"subject_name": "Math", "description": "Numbers"}),
        )
        .await,
    )
    .await;
    let id = created["subject"]["subject_id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/subjects/update/{id}/"),
        serde_json::json!({"subject_name": "Mathematics"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Subject updated successfully");
    assert_eq!(json["subject"]["subject_name"], "Mathematics");
    assert_eq!(json["subject"]["description"], "Numbers");
    assert_ne!(json["subject"]["updated_at"], created["subject"]["updated_at"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_subject_returns_500(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/subjects/update/999999/",
        serde_json::json!({"subject_name": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["status"], "error");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_subject_with_bad_json_returns_500(pool: PgPool) {
    let id = common::create_subject(&pool, "Math").await;

    let app = common::build_test_app(pool);
    let response = common::post_raw(
        app,
        &format!("/subjects/update/{id}/"),
        "application/json",
        "{oops",
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_subject_keeps_trainers(pool: PgPool) {
    let id = common::create_subject(&pool, "Math").await;
    let code = common::create_trainer(&pool, serde_json::json!({"name": "Alice", "subject": id})).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/subjects/delete/{id}/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Subject 'Math' deleted successfully"
    );

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/trainers/").await).await;
    let trainer = &json["trainers"][0];
    assert_eq!(trainer["trainer_code"], code.as_str());
    assert!(trainer["subject"].is_null());
    assert_eq!(trainer["subject_name"], "-");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_subject_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/subjects/delete/999999/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_blank_description_clears_it(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/subjects/create/",
            serde_json::json!({"subject_name": "Math", "description": "Numbers"}),
        )
        .await,
    )
    .await;
    let id = created["subject"]["subject_id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/subjects/update/{id}/"),
        serde_json::json!({"description": "   "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["subject"]["description"].is_null());

    let stored: Option<String> =
        sqlx::query_scalar("SELECT description FROM subjects WHERE subject_id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_trims_description(pool: PgPool) {
    let id = common::create_subject(&pool, "Math").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/subjects/update/{id}/"),
        serde_json::json!({"description": "  Algebra  "}),
    )
    .await;
    assert_eq!(body_json(response).await["subject"]["description"], "Algebra");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_subject_id_returns_error_envelope(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/subjects/abc/").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["status"], "error");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/subjects/delete/abc/").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["status"], "error");

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/subjects/update/abc/",
        serde_json::json!({"subject_name": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["status"], "error");
}
