//! In-memory employee store
//!
//! Thread-safe map-backed store, primarily for tests.

use crate::error::AppError;
use crate::models::Employee;
use crate::store::EmployeeStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory employee store
pub struct MemoryEmployeeStore {
    employees: Arc<RwLock<HashMap<i32, Employee>>>,
    next_id: AtomicI32,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self {
            employees: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for MemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let employees = self.employees.read().await;
        Ok(employees.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        let employees = self.employees.read().await;
        Ok(employees.values().find(|e| e.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let employees = self.employees.read().await;
        let mut all: Vec<Employee> = employees.values().cloned().collect();
        all.sort_by_key(|e| e.id);
        Ok(all)
    }

    async fn save(&self, mut employee: Employee) -> Result<Employee, AppError> {
        let mut employees = self.employees.write().await;
        let id = match employee.id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        employee.id = Some(id);
        employees.insert(id, employee.clone());
        Ok(employee)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError> {
        let employees = self.employees.read().await;
        Ok(employees.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        let mut employees = self.employees.write().await;
        employees.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        let mut employees = self.employees.write().await;
        employees.clear();
        Ok(())
    }
}
