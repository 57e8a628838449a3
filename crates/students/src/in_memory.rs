use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use rollcall_core::{DomainError, DomainResult, StudentId};

use crate::directory::{Receipt, StudentDirectory};
use crate::student::{
    NewStudent, StatusChange, Student, StudentFilter, StudentStatus, StudentUpdate,
};

/// In-memory student directory for tests/dev.
#[derive(Debug)]
pub struct InMemoryStudentDirectory {
    records: RwLock<HashMap<StudentId, Student>>,
    next_id: AtomicI64,
}

impl InMemoryStudentDirectory {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn email_taken(records: &HashMap<StudentId, Student>, email: &str, except: Option<StudentId>) -> bool {
        records.values().any(|s| {
            Some(s.id) != except && s.email.eq_ignore_ascii_case(email)
        })
    }
}

impl Default for InMemoryStudentDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentDirectory for InMemoryStudentDirectory {
    async fn list(&self, filter: StudentFilter) -> DomainResult<Vec<Student>> {
        let records = self
            .records
            .read()
            .map_err(|_| DomainError::internal("directory lock poisoned"))?;

        let mut students: Vec<Student> = records
            .values()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        students.sort_by_key(|s| s.id);
        Ok(students)
    }

    async fn create(&self, input: NewStudent) -> DomainResult<Receipt> {
        if input.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if input.email.trim().is_empty() {
            return Err(DomainError::validation("email cannot be empty"));
        }

        let mut records = self
            .records
            .write()
            .map_err(|_| DomainError::internal("directory lock poisoned"))?;

        if Self::email_taken(&records, &input.email, None) {
            return Err(DomainError::conflict("student with this email already exists"));
        }

        let id = StudentId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let now = Utc::now();
        records.insert(
            id,
            Student {
                id,
                name: input.name,
                email: input.email,
                class_name: input.class_name,
                section: input.section,
                roll: input.roll,
                status: StudentStatus::Active,
                reviewed_by: None,
                created_at: now,
                updated_at: now,
            },
        );

        Ok(Receipt::new("Student added successfully"))
    }

    async fn detail(&self, id: StudentId) -> DomainResult<Student> {
        let records = self
            .records
            .read()
            .map_err(|_| DomainError::internal("directory lock poisoned"))?;

        records.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    async fn update(&self, update: StudentUpdate) -> DomainResult<Receipt> {
        let mut records = self
            .records
            .write()
            .map_err(|_| DomainError::internal("directory lock poisoned"))?;

        if !records.contains_key(&update.student_id) {
            return Err(DomainError::NotFound);
        }
        if let Some(email) = &update.email {
            if Self::email_taken(&records, email, Some(update.student_id)) {
                return Err(DomainError::conflict("student with this email already exists"));
            }
        }

        let student = records
            .get_mut(&update.student_id)
            .ok_or(DomainError::NotFound)?;

        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
            student.name = name;
        }
        if let Some(email) = update.email {
            student.email = email;
        }
        if let Some(class_name) = update.class_name {
            student.class_name = Some(class_name);
        }
        if let Some(section) = update.section {
            student.section = Some(section);
        }
        if let Some(roll) = update.roll {
            student.roll = Some(roll);
        }
        student.updated_at = Utc::now();

        Ok(Receipt::new("Student updated successfully"))
    }

    async fn set_status(&self, change: StatusChange) -> DomainResult<Receipt> {
        let mut records = self
            .records
            .write()
            .map_err(|_| DomainError::internal("directory lock poisoned"))?;

        let student = records
            .get_mut(&change.student_id)
            .ok_or(DomainError::NotFound)?;

        student.status = if change.active {
            StudentStatus::Active
        } else {
            StudentStatus::Disabled
        };
        student.reviewed_by = Some(change.reviewer_id);
        student.updated_at = change.occurred_at;

        Ok(Receipt::new("Student status updated successfully"))
    }

    async fn delete(&self, id: StudentId) -> DomainResult<Receipt> {
        let mut records = self
            .records
            .write()
            .map_err(|_| DomainError::internal("directory lock poisoned"))?;

        records.remove(&id).ok_or(DomainError::NotFound)?;
        Ok(Receipt::new("Student deleted successfully"))
    }
}
