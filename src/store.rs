//! Employee storage
//!
//! The service talks to storage only through the `EmployeeStore` trait.
//! Production wires the PostgreSQL store; tests wire the in-memory one.

mod memory;
mod postgres;

pub use memory::MemoryEmployeeStore;
pub use postgres::PgEmployeeStore;

use crate::error::AppError;
use crate::models::Employee;
use async_trait::async_trait;

/// Storage contract for employee records.
///
/// `save` is an upsert: a record without an id is inserted and assigned
/// one, a record with an id overwrites the stored record in place.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError>;

    async fn find_all(&self) -> Result<Vec<Employee>, AppError>;

    async fn save(&self, employee: Employee) -> Result<Employee, AppError>;

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError>;

    async fn delete_all(&self) -> Result<(), AppError>;
}
