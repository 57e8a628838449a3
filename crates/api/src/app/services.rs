use std::sync::Arc;

use rollcall_students::{InMemoryStudentDirectory, StudentDirectory};

/// Application services shared across handlers via `Extension`.
#[derive(Clone)]
pub struct AppServices {
    directory: Arc<dyn StudentDirectory>,
}

impl AppServices {
    pub fn new(directory: Arc<dyn StudentDirectory>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &dyn StudentDirectory {
        self.directory.as_ref()
    }
}

/// Build the default service set (in-memory directory).
pub fn build_services() -> AppServices {
    AppServices::new(Arc::new(InMemoryStudentDirectory::new()))
}
