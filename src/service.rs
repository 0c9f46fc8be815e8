//! Employee service
//!
//! Business layer between the HTTP handlers and the store. Enforces the
//! two domain rules: no duplicate email on create, and an existing id on
//! update/delete.

use crate::error::AppError;
use crate::models::Employee;
use crate::store::EmployeeStore;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Employee business operations over an injected store
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Create a new employee. Rejects the request if the email is already
    /// in use; otherwise the store assigns the id.
    ///
    /// The email check and the insert are two separate store calls with no
    /// transaction between them; the store's unique index is the backstop
    /// for concurrent creates.
    pub async fn create(&self, mut employee: Employee) -> Result<Employee, AppError> {
        if self.store.find_by_email(&employee.email).await?.is_some() {
            warn!("Employee with email {} already exists", employee.email);
            return Err(AppError::EmailAlreadyExists(employee.email));
        }

        // The store assigns the id; ignore any client-supplied one.
        employee.id = None;
        let saved = self.store.save(employee).await?;
        info!("Employee saved successfully: {:?}", saved);
        Ok(saved)
    }

    /// Get a single employee by id
    pub async fn get(&self, id: i32) -> Result<Employee, AppError> {
        match self.store.find_by_id(id).await? {
            Some(employee) => {
                info!("Employee found with ID {}: {:?}", id, employee);
                Ok(employee)
            }
            None => {
                error!("No employee found with ID {}", id);
                Err(AppError::EmployeeNotFound(id))
            }
        }
    }

    /// List all employees, in whatever order the store returns
    pub async fn list_all(&self) -> Result<Vec<Employee>, AppError> {
        let employees = self.store.find_all().await?;
        info!("Retrieved all employees ({} records)", employees.len());
        Ok(employees)
    }

    /// Replace an existing employee record in full. The caller must have
    /// set the id. Email uniqueness is not re-checked on update.
    pub async fn update(&self, employee: Employee) -> Result<Employee, AppError> {
        let id = employee
            .id
            .ok_or_else(|| AppError::Internal("update called without an id".to_string()))?;

        if self.store.exists_by_id(id).await? {
            let updated = self.store.save(employee).await?;
            info!("Employee data updated successfully: {:?}", updated);
            Ok(updated)
        } else {
            error!("Cannot update - No employee found with ID {}", id);
            Err(AppError::EmployeeNotFound(id))
        }
    }

    /// Delete one employee, returning the record as it was before deletion
    pub async fn delete(&self, id: i32) -> Result<Employee, AppError> {
        match self.store.find_by_id(id).await? {
            Some(employee) => {
                self.store.delete_by_id(id).await?;
                info!("Employee deleted successfully with ID: {}", id);
                Ok(employee)
            }
            None => {
                error!("Cannot delete - No employee found with ID {}", id);
                Err(AppError::EmployeeNotFound(id))
            }
        }
    }

    /// Delete every employee, returning the records as they were before
    /// deletion. Read and delete are two separate store calls.
    pub async fn delete_all(&self) -> Result<Vec<Employee>, AppError> {
        let employees = self.store.find_all().await?;
        self.store.delete_all().await?;
        info!("All employees deleted successfully.");
        Ok(employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryEmployeeStore;
    use pretty_assertions::assert_eq;

    fn service() -> EmployeeService {
        EmployeeService::new(Arc::new(MemoryEmployeeStore::new()))
    }

    fn employee(name: &str, email: &str) -> Employee {
        Employee {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            department: None,
            position: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let service = service();
        let created = service.create(employee("A", "a@x.com")).await.unwrap();
        assert_eq!(created.id, Some(1));
        assert_eq!(created.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let service = service();
        service.create(employee("A", "a@x.com")).await.unwrap();

        let err = service.create(employee("B", "a@x.com")).await.unwrap_err();
        assert!(matches!(err, AppError::EmailAlreadyExists(ref e) if e == "a@x.com"));

        // Only the first record survives
        let all = service.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "A");
    }

    #[tokio::test]
    async fn test_get_missing_id_fails() {
        let service = service();
        let err = service.get(99).await.unwrap_err();
        assert!(matches!(err, AppError::EmployeeNotFound(99)));
    }

    #[tokio::test]
    async fn test_get_returns_existing() {
        let service = service();
        let created = service.create(employee("A", "a@x.com")).await.unwrap();
        let fetched = service.get(created.id.unwrap()).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_update_replaces_record_in_full() {
        let service = service();
        let created = service
            .create(Employee {
                department: Some("Sales".to_string()),
                ..employee("A", "a@x.com")
            })
            .await
            .unwrap();

        let mut replacement = employee("A2", "a@x.com");
        replacement.id = created.id;
        let updated = service.update(replacement).await.unwrap();

        assert_eq!(updated.name, "A2");
        // Full replacement, not a merge: the department is gone
        assert_eq!(updated.department, None);
        assert_eq!(service.get(created.id.unwrap()).await.unwrap().name, "A2");
    }

    #[tokio::test]
    async fn test_update_missing_id_leaves_store_unchanged() {
        let service = service();
        service.create(employee("A", "a@x.com")).await.unwrap();

        let mut ghost = employee("B", "b@x.com");
        ghost.id = Some(42);
        let err = service.update(ghost).await.unwrap_err();
        assert!(matches!(err, AppError::EmployeeNotFound(42)));

        let all = service.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "A");
    }

    #[tokio::test]
    async fn test_update_does_not_check_email_uniqueness() {
        // Deliberate behavior: update may introduce a duplicate email
        let service = service();
        service.create(employee("A", "a@x.com")).await.unwrap();
        let second = service.create(employee("B", "b@x.com")).await.unwrap();

        let mut stolen = employee("B", "a@x.com");
        stolen.id = second.id;
        let updated = service.update(stolen).await.unwrap();
        assert_eq!(updated.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_delete_returns_pre_deletion_record() {
        let service = service();
        let created = service.create(employee("A", "a@x.com")).await.unwrap();
        let id = created.id.unwrap();

        let deleted = service.delete(id).await.unwrap();
        assert_eq!(deleted, created);

        let err = service.get(id).await.unwrap_err();
        assert!(matches!(err, AppError::EmployeeNotFound(i) if i == id));
    }

    #[tokio::test]
    async fn test_delete_missing_id_fails() {
        let service = service();
        let err = service.delete(7).await.unwrap_err();
        assert!(matches!(err, AppError::EmployeeNotFound(7)));
    }

    #[tokio::test]
    async fn test_delete_all_returns_previous_records() {
        let service = service();
        service.create(employee("A", "a@x.com")).await.unwrap();
        service.create(employee("B", "b@x.com")).await.unwrap();

        let deleted = service.delete_all().await.unwrap();
        assert_eq!(deleted.len(), 2);
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_all_matches_stored_ids() {
        let service = service();
        let a = service.create(employee("A", "a@x.com")).await.unwrap();
        let b = service.create(employee("B", "b@x.com")).await.unwrap();

        let mut ids: Vec<i32> = service
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|e| e.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![a.id.unwrap(), b.id.unwrap()]);
    }
}
