//! Students domain module (directory records and the persistence boundary).
//!
//! This crate contains the student record model, the `StudentDirectory` trait
//! the HTTP layer delegates every data operation to, and an in-memory
//! directory used for tests and local runs.

pub mod directory;
pub mod in_memory;
pub mod student;

pub use directory::{Receipt, StudentDirectory};
pub use in_memory::InMemoryStudentDirectory;
pub use student::{
    NewStudent, StatusChange, Student, StudentFilter, StudentStatus, StudentUpdate,
};
