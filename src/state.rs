//! Application state management
//!
//! Contains shared state accessible across all handlers.

use crate::service::EmployeeService;
use crate::store::EmployeeStore;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Employee business operations over the injected store
    pub employees: EmployeeService,
}

impl AppState {
    /// Create new application state over any store implementation
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            employees: EmployeeService::new(store),
        }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
