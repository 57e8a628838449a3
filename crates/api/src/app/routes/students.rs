use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Response,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::Value;

use rollcall_core::{ReviewerId, StudentId};
use rollcall_students::StatusChange;

use crate::app::services::AppServices;
use crate::app::{dto, errors, respond, validate};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_students).post(add_student))
        .route(
            "/:id",
            get(get_student_detail)
                .put(update_student)
                .delete(delete_student),
        )
        .route("/:id/status", post(change_student_status))
}

/// `GET /students` - list students with optional filters.
pub async fn list_students(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListStudentsQuery>,
) -> Response {
    let validation = validate::query_params(&query);
    if !validation.is_valid() {
        return respond::validation_error(validation.into_errors());
    }

    let students = match services.directory().list(query.into_filter()).await {
        Ok(students) => students,
        Err(err) => return errors::directory_error_to_response(err),
    };

    let data = Value::Array(students.iter().map(dto::student_to_json).collect());
    respond::success(StatusCode::OK, "Students retrieved successfully", Some(data))
}

/// `POST /students` - create a new student.
pub async fn add_student(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Value>,
) -> Response {
    let validation = validate::create_student(&body);
    if !validation.is_valid() {
        return respond::validation_error(validation.into_errors());
    }

    let receipt = match services
        .directory()
        .create(dto::new_student_from_body(&body))
        .await
    {
        Ok(receipt) => receipt,
        Err(err) => return errors::directory_error_to_response(err),
    };

    respond::created(receipt.message, None)
}

/// `PUT /students/:id` - update an existing student.
pub async fn update_student(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let validation = validate::update_student(&body, Some(&id));
    if !validation.is_valid() {
        return respond::validation_error(validation.into_errors());
    }

    let Ok(student_id) = StudentId::parse_loose(&id) else {
        return respond::validation_error("Student ID must be a valid number");
    };

    let receipt = match services
        .directory()
        .update(dto::student_update_from_body(student_id, &body))
        .await
    {
        Ok(receipt) => receipt,
        Err(err) => return errors::directory_error_to_response(err),
    };

    respond::success(StatusCode::OK, receipt.message, None)
}

/// `GET /students/:id` - retrieve a specific student's details.
pub async fn get_student_detail(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let validation = validate::student_id(Some(&id));
    if !validation.is_valid() {
        return respond::validation_error(validation.into_errors());
    }

    let Ok(student_id) = StudentId::parse_loose(&id) else {
        return respond::validation_error("Student ID must be a valid number");
    };

    let student = match services.directory().detail(student_id).await {
        Ok(student) => student,
        Err(err) => return errors::directory_error_to_response(err),
    };

    respond::success(
        StatusCode::OK,
        "Student details retrieved successfully",
        Some(dto::student_to_json(&student)),
    )
}

/// `POST /students/:id/status` - enable or disable a student.
pub async fn change_student_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let validation = validate::status_change(&body, Some(&id));
    if !validation.is_valid() {
        return respond::validation_error(validation.into_errors());
    }

    let Ok(student_id) = StudentId::parse_loose(&id) else {
        return respond::validation_error("Student ID must be a valid number");
    };
    let Some(reviewer_id) = body.get("reviewerId").and_then(validate::coerce_id) else {
        return respond::validation_error("Reviewer ID must be a valid number");
    };

    let change = StatusChange {
        student_id,
        reviewer_id: ReviewerId::new(reviewer_id),
        active: validate::is_truthy(body.get("status")),
        occurred_at: Utc::now(),
    };

    let receipt = match services.directory().set_status(change).await {
        Ok(receipt) => receipt,
        Err(err) => return errors::directory_error_to_response(err),
    };

    respond::success(StatusCode::OK, receipt.message, None)
}

/// `DELETE /students/:id` - delete a student.
pub async fn delete_student(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let validation = validate::student_id(Some(&id));
    if !validation.is_valid() {
        return respond::validation_error(validation.into_errors());
    }

    let Ok(student_id) = StudentId::parse_loose(&id) else {
        return respond::validation_error("Student ID must be a valid number");
    };

    let receipt = match services.directory().delete(student_id).await {
        Ok(receipt) => receipt,
        Err(err) => return errors::directory_error_to_response(err),
    };

    respond::success(StatusCode::OK, receipt.message, None)
}
