//! Request validation.
//!
//! Pure, synchronous checks over loosely-typed request input: JSON bodies as
//! `serde_json::Value` and path identifiers as raw strings. Handlers run the
//! matching function before touching the directory and turn a non-empty error
//! list into a 400 envelope.
//!
//! Identifier checks share [`parse_loose_int`] with the handlers' own
//! coercion so the value accepted here is exactly the value passed
//! downstream.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use rollcall_core::parse_loose_int;

use crate::app::dto::ListStudentsQuery;

/// Permissive email shape: one `@`, no whitespace around either part, at
/// least one dot in the domain. Deliberately not an RFC validator.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Outcome of validating one request's input shape.
///
/// Invalid iff at least one error was recorded; the field is private so the
/// invariant holds by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self::default()
    }

    fn push(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Validate a student creation payload.
///
/// A non-object body short-circuits; otherwise name and email problems
/// accumulate independently.
pub fn create_student(body: &Value) -> ValidationResult {
    let mut result = ValidationResult::ok();

    let Some(fields) = body.as_object() else {
        result.push("Invalid request body");
        return result;
    };

    match fields.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => {}
        _ => result.push("Name is required and must be a valid string"),
    }

    match fields.get("email").and_then(Value::as_str) {
        None => result.push("Email is required and must be a valid string"),
        Some("") => result.push("Email is required and must be a valid string"),
        Some(email) if !EMAIL_REGEX.is_match(email) => {
            result.push("Email must be in a valid format");
        }
        Some(_) => {}
    }

    result
}

/// Validate a student update payload. All three checks run regardless of
/// earlier failures.
pub fn update_student(body: &Value, id: Option<&str>) -> ValidationResult {
    let mut result = ValidationResult::ok();

    push_id_errors(
        &mut result,
        id,
        "Student ID is required",
        "Student ID must be a valid number",
    );

    if !body.is_object() {
        result.push("Invalid request body");
    }

    result
}

/// Validate a status change payload.
///
/// The reviewer checks are independent: a missing-or-falsy reviewer reports
/// "required", a present-but-unparseable one reports "valid number", never
/// both.
pub fn status_change(body: &Value, id: Option<&str>) -> ValidationResult {
    let mut result = ValidationResult::ok();

    push_id_errors(
        &mut result,
        id,
        "Student ID is required",
        "Student ID must be a valid number",
    );

    if body.get("status").is_none_or(Value::is_null) {
        result.push("Status is required");
    }

    match body.get("reviewerId") {
        reviewer if is_falsy(reviewer) => result.push("Reviewer ID is required"),
        Some(reviewer) if !is_valid_id_value(reviewer) => {
            result.push("Reviewer ID must be a valid number");
        }
        _ => {}
    }

    result
}

/// Validate a bare student identifier (detail/delete requests).
pub fn student_id(id: Option<&str>) -> ValidationResult {
    let mut result = ValidationResult::ok();
    push_id_errors(
        &mut result,
        id,
        "Student ID is required",
        "Student ID must be a valid number",
    );
    result
}

/// Validate listing query parameters. All filters are optional, so this is
/// always valid; kept as the extension point for future filter checks.
pub fn query_params(_query: &ListStudentsQuery) -> ValidationResult {
    ValidationResult::ok()
}

/// The required/valid identifier checks accumulate independently: a missing
/// id fails both, `"0"` fails only the validity check.
fn push_id_errors(
    result: &mut ValidationResult,
    id: Option<&str>,
    required_message: &str,
    invalid_message: &str,
) {
    if id.is_none_or(str::is_empty) {
        result.push(required_message);
    }
    if !id.is_some_and(is_valid_id_str) {
        result.push(invalid_message);
    }
}

fn is_valid_id_str(id: &str) -> bool {
    parse_loose_int(id).is_some_and(|v| v > 0)
}

/// Identifier validity over JSON: strings use the loose parse, numbers are
/// used as-is; anything else is invalid. Valid iff strictly positive.
fn is_valid_id_value(value: &Value) -> bool {
    match value {
        Value::String(s) => is_valid_id_str(s),
        Value::Number(n) => n.as_f64().is_some_and(|f| f > 0.0),
        _ => false,
    }
}

/// Coerce a JSON identifier to the integer handed to the directory, with the
/// same truncation the validity check applied.
pub fn coerce_id(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => parse_loose_int(s),
        Value::Number(n) => n.as_f64().map(|f| f as i64),
        _ => None,
    }
}

/// Boolean coercion for the `status` field: absent, `null`, `false`, `0` and
/// `""` are false; everything else (including `[]` and `{}`) is true.
pub fn is_truthy(value: Option<&Value>) -> bool {
    !is_falsy(value)
}

fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().is_none_or(|f| f == 0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
