//! PostgreSQL employee store
//!
//! Backed by a deadpool connection pool; one statement per operation.

use crate::error::AppError;
use crate::models::Employee;
use crate::store::EmployeeStore;
use async_trait::async_trait;
use deadpool_postgres::Pool;
use tokio_postgres::Row;

/// PostgreSQL-backed employee store
pub struct PgEmployeeStore {
    pool: Pool,
}

impl PgEmployeeStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Create the employees table if it does not exist.
    ///
    /// The UNIQUE constraint on email is the database-level backstop for
    /// concurrent creates that both pass the service-layer check.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        let client = self.pool.get().await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS employees (
                    id SERIAL PRIMARY KEY,
                    name VARCHAR(255) NOT NULL,
                    email VARCHAR(255) UNIQUE NOT NULL,
                    department VARCHAR(255),
                    position VARCHAR(255)
                )",
                &[],
            )
            .await?;

        Ok(())
    }

    fn row_to_employee(row: &Row) -> Employee {
        Employee {
            id: Some(row.get("id")),
            name: row.get("name"),
            email: row.get("email"),
            department: row.get("department"),
            position: row.get("position"),
        }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_opt(
                "SELECT id, name, email, department, position
                 FROM employees WHERE id = $1",
                &[&id],
            )
            .await?;

        Ok(row.as_ref().map(Self::row_to_employee))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_opt(
                "SELECT id, name, email, department, position
                 FROM employees WHERE email = $1",
                &[&email],
            )
            .await?;

        Ok(row.as_ref().map(Self::row_to_employee))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let client = self.pool.get().await?;

        let rows = client
            .query("SELECT id, name, email, department, position FROM employees", &[])
            .await?;

        Ok(rows.iter().map(Self::row_to_employee).collect())
    }

    async fn save(&self, employee: Employee) -> Result<Employee, AppError> {
        let client = self.pool.get().await?;

        let row = match employee.id {
            Some(id) => {
                client
                    .query_one(
                        "UPDATE employees
                         SET name = $2, email = $3, department = $4, position = $5
                         WHERE id = $1
                         RETURNING id, name, email, department, position",
                        &[
                            &id,
                            &employee.name,
                            &employee.email,
                            &employee.department,
                            &employee.position,
                        ],
                    )
                    .await?
            }
            None => {
                client
                    .query_one(
                        "INSERT INTO employees (name, email, department, position)
                         VALUES ($1, $2, $3, $4)
                         RETURNING id, name, email, department, position",
                        &[
                            &employee.name,
                            &employee.email,
                            &employee.department,
                            &employee.position,
                        ],
                    )
                    .await
                    .map_err(|e| {
                        // Concurrent create that lost the race to the unique index
                        if e.to_string().contains("unique constraint")
                            || e.to_string().contains("duplicate key")
                        {
                            AppError::EmailAlreadyExists(employee.email.clone())
                        } else {
                            AppError::Database(e)
                        }
                    })?
            }
        };

        Ok(Self::row_to_employee(&row))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_one("SELECT EXISTS(SELECT 1 FROM employees WHERE id = $1)", &[&id])
            .await?;

        Ok(row.get(0))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        let client = self.pool.get().await?;

        client
            .execute("DELETE FROM employees WHERE id = $1", &[&id])
            .await?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        let client = self.pool.get().await?;

        client.execute("DELETE FROM employees", &[]).await?;

        Ok(())
    }
}
