use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rollcall_core::{ReviewerId, StudentId};

/// Student status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    Active,
    Disabled,
}

/// A student directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub class_name: Option<String>,
    pub section: Option<String>,
    pub roll: Option<i64>,
    pub status: StudentStatus,
    /// Reviewer who last changed the status, if any.
    pub reviewed_by: Option<ReviewerId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    pub fn is_active(&self) -> bool {
        self.status == StudentStatus::Active
    }
}

/// Input for creating a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub class_name: Option<String>,
    pub section: Option<String>,
    pub roll: Option<i64>,
}

/// Partial update of an existing student; `None` fields keep existing values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentUpdate {
    pub student_id: StudentId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub class_name: Option<String>,
    pub section: Option<String>,
    pub roll: Option<i64>,
}

/// Status change request: enable or disable a student, attributed to a reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub student_id: StudentId,
    pub reviewer_id: ReviewerId,
    pub active: bool,
    pub occurred_at: DateTime<Utc>,
}

/// Listing filter; all fields optional, empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    /// Case-insensitive substring match on the student name.
    pub name: Option<String>,
    pub class_name: Option<String>,
    pub section: Option<String>,
    pub roll: Option<i64>,
}

impl StudentFilter {
    pub fn matches(&self, student: &Student) -> bool {
        if let Some(needle) = &self.name {
            if !student
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(class_name) = &self.class_name {
            if student.class_name.as_deref() != Some(class_name.as_str()) {
                return false;
            }
        }
        if let Some(section) = &self.section {
            if student.section.as_deref() != Some(section.as_str()) {
                return false;
            }
        }
        if let Some(roll) = self.roll {
            if student.roll != Some(roll) {
                return false;
            }
        }
        true
    }
}
