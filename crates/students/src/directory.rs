use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use rollcall_core::{DomainResult, StudentId};

use crate::student::{NewStudent, StatusChange, Student, StudentFilter, StudentUpdate};

/// Outcome of a directory mutation: the human-readable message surfaced to
/// API clients in the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub message: String,
}

impl Receipt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Persistence boundary for student records.
///
/// Every HTTP handler performs exactly one call through this trait after its
/// input has been validated. Implementations own ordering between concurrent
/// requests; the HTTP layer holds no state of its own.
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    async fn list(&self, filter: StudentFilter) -> DomainResult<Vec<Student>>;
    async fn create(&self, input: NewStudent) -> DomainResult<Receipt>;
    async fn detail(&self, id: StudentId) -> DomainResult<Student>;
    async fn update(&self, update: StudentUpdate) -> DomainResult<Receipt>;
    async fn set_status(&self, change: StatusChange) -> DomainResult<Receipt>;
    async fn delete(&self, id: StudentId) -> DomainResult<Receipt>;
}
