//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::EmployeeDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub directory: Arc<dyn EmployeeDirectory>,
}

impl HttpState {
    /// Construct state from the directory port implementation.
    ///
    /// # Examples
    /// ```ignore
    /// use std::sync::Arc;
    /// use employee_directory::domain::EmployeeDirectoryService;
    /// use employee_directory::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(EmployeeDirectoryService::new(Arc::new(source))));
    /// ```
    pub fn new(directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self { directory }
    }
}
