use serde::Deserialize;
use serde_json::Value;

use rollcall_core::{StudentId, parse_loose_int};
use rollcall_students::{NewStudent, Student, StudentFilter, StudentStatus, StudentUpdate};

use crate::app::validate;

// -------------------------
// Request DTOs
// -------------------------

/// Query parameters for `GET /students`. All filters optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStudentsQuery {
    pub name: Option<String>,
    pub class_name: Option<String>,
    pub section: Option<String>,
    pub roll: Option<String>,
}

impl ListStudentsQuery {
    pub fn into_filter(self) -> StudentFilter {
        StudentFilter {
            name: self.name,
            class_name: self.class_name,
            section: self.section,
            roll: self.roll.as_deref().and_then(parse_loose_int),
        }
    }
}

// -------------------------
// Body extraction (post-validation)
// -------------------------

/// Build creation input from a validated body. Validation has already
/// guaranteed `name` and `email` are present strings.
pub fn new_student_from_body(body: &Value) -> NewStudent {
    NewStudent {
        name: str_field(body, "name").unwrap_or_default(),
        email: str_field(body, "email").unwrap_or_default(),
        class_name: str_field(body, "className"),
        section: str_field(body, "section"),
        roll: body.get("roll").and_then(validate::coerce_id),
    }
}

/// Build a partial update from a validated body; absent fields stay `None`.
pub fn student_update_from_body(student_id: StudentId, body: &Value) -> StudentUpdate {
    StudentUpdate {
        student_id,
        name: str_field(body, "name"),
        email: str_field(body, "email"),
        class_name: str_field(body, "className"),
        section: str_field(body, "section"),
        roll: body.get("roll").and_then(validate::coerce_id),
    }
}

fn str_field(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_string)
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn student_to_json(student: &Student) -> Value {
    serde_json::json!({
        "id": student.id.as_i64(),
        "name": student.name,
        "email": student.email,
        "className": student.class_name,
        "section": student.section,
        "roll": student.roll,
        "status": match student.status {
            StudentStatus::Active => "active",
            StudentStatus::Disabled => "disabled",
        },
        "reviewedBy": student.reviewed_by.map(|r| r.as_i64()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_roll_uses_the_loose_parse() {
        let query = ListStudentsQuery {
            roll: Some("12abc".to_string()),
            ..ListStudentsQuery::default()
        };
        assert_eq!(query.into_filter().roll, Some(12));

        let query = ListStudentsQuery {
            roll: Some("abc".to_string()),
            ..ListStudentsQuery::default()
        };
        assert_eq!(query.into_filter().roll, None);
    }

    #[test]
    fn new_student_picks_known_fields_and_ignores_extras() {
        let input = new_student_from_body(&json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "className": "Mathematics",
            "roll": "7",
            "unexpected": {"nested": true},
        }));
        assert_eq!(input.name, "Ada Lovelace");
        assert_eq!(input.email, "ada@example.com");
        assert_eq!(input.class_name.as_deref(), Some("Mathematics"));
        assert_eq!(input.section, None);
        assert_eq!(input.roll, Some(7));
    }

    #[test]
    fn update_keeps_absent_fields_none() {
        let update = student_update_from_body(StudentId::new(4), &json!({"section": "B"}));
        assert_eq!(update.student_id, StudentId::new(4));
        assert_eq!(update.name, None);
        assert_eq!(update.email, None);
        assert_eq!(update.section.as_deref(), Some("B"));
    }
}
