use axum::http::StatusCode;
use axum::response::Response;

use rollcall_core::DomainError;

use crate::app::respond;

/// Map a directory failure to an error envelope.
///
/// Validation failures never reach this point (handlers return a 400 before
/// calling the directory); what remains is the service layer's own verdicts.
pub fn directory_error_to_response(err: DomainError) -> Response {
    match err {
        DomainError::NotFound => respond::not_found("Resource not found"),
        DomainError::Validation(msg) => respond::validation_error(msg),
        DomainError::InvalidId(msg) => respond::validation_error(msg),
        DomainError::Conflict(msg) => respond::error(StatusCode::CONFLICT, "Conflict", msg),
        DomainError::Internal(msg) => respond::server_error(msg),
    }
}
