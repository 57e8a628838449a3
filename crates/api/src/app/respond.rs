//! Uniform response envelope emitted by every endpoint.
//!
//! Success bodies are `{success: true, message, data?}` and error bodies are
//! `{success: false, message, errors?}`. The `data` key is present only when
//! a payload was supplied; the `errors` key is omitted when the list is
//! empty. No endpoint ever populates both.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct Envelope {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

/// One error or many: a single string becomes a one-element list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList(Vec<String>);

impl ErrorList {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for ErrorList {
    fn from(error: &str) -> Self {
        Self(vec![error.to_string()])
    }
}

impl From<String> for ErrorList {
    fn from(error: String) -> Self {
        Self(vec![error])
    }
}

impl From<Vec<String>> for ErrorList {
    fn from(errors: Vec<String>) -> Self {
        Self(errors)
    }
}

/// Write a success envelope; the `data` key appears only for `Some`.
pub fn success(status: StatusCode, message: impl Into<String>, data: Option<Value>) -> Response {
    (
        status,
        Json(Envelope {
            success: true,
            message: message.into(),
            data,
            errors: Vec::new(),
        }),
    )
        .into_response()
}

/// 201 success envelope for newly created resources.
pub fn created(message: impl Into<String>, data: Option<Value>) -> Response {
    success(StatusCode::CREATED, message, data)
}

/// Write an error envelope with the given status and error list.
pub fn error(status: StatusCode, message: impl Into<String>, errors: impl Into<ErrorList>) -> Response {
    (
        status,
        Json(Envelope {
            success: false,
            message: message.into(),
            data: None,
            errors: errors.into().into_vec(),
        }),
    )
        .into_response()
}

/// 400 envelope with the fixed `Validation failed` message.
pub fn validation_error(errors: impl Into<ErrorList>) -> Response {
    error(StatusCode::BAD_REQUEST, "Validation failed", errors)
}

/// 404 envelope; the message lands in the `errors` list.
pub fn not_found(message: impl Into<String>) -> Response {
    error(StatusCode::NOT_FOUND, "Not Found", message.into())
}

/// 500 envelope; the message lands in the `errors` list.
pub fn server_error(message: impl Into<String>) -> Response {
    error(StatusCode::INTERNAL_SERVER_ERROR, "Server Error", message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_value(envelope: Envelope) -> Value {
        serde_json::to_value(envelope).unwrap()
    }

    #[test]
    fn success_envelope_omits_data_key_for_none() {
        let body = to_value(Envelope {
            success: true,
            message: "Success".to_string(),
            data: None,
            errors: Vec::new(),
        });
        assert_eq!(body, json!({"success": true, "message": "Success"}));
    }

    #[test]
    fn success_envelope_keeps_falsy_data_payloads() {
        for data in [json!(0), json!([])] {
            let body = to_value(Envelope {
                success: true,
                message: "Success".to_string(),
                data: Some(data.clone()),
                errors: Vec::new(),
            });
            assert_eq!(body["data"], data);
        }
    }

    #[test]
    fn error_envelope_omits_empty_error_list() {
        let body = to_value(Envelope {
            success: false,
            message: "An error occurred".to_string(),
            data: None,
            errors: Vec::new(),
        });
        assert_eq!(
            body,
            json!({"success": false, "message": "An error occurred"})
        );
    }

    #[test]
    fn single_error_string_becomes_one_element_list() {
        let errors: ErrorList = "x".into();
        assert_eq!(errors.into_vec(), vec!["x".to_string()]);
    }

    #[test]
    fn error_vec_passes_through_in_order() {
        let errors: ErrorList = vec!["a".to_string(), "b".to_string()].into();
        assert_eq!(errors.into_vec(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn helpers_use_the_fixed_status_codes() {
        assert_eq!(
            success(StatusCode::OK, "Success", None).status(),
            StatusCode::OK
        );
        assert_eq!(created("done", None).status(), StatusCode::CREATED);
        assert_eq!(
            validation_error(vec!["bad".to_string()]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(not_found("Resource not found").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            server_error("Internal server error").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
