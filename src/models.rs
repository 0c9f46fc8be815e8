//! Data models and DTOs (Data Transfer Objects)
//!
//! Contains the Employee record, the validated request body, and the
//! success envelope returned by every endpoint.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An employee record.
///
/// `id` is `None` until the store assigns one on insert; it is immutable
/// after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Request body for creating or updating an employee
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[validate(length(min = 1, max = 255, message = "Name must not be blank"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    pub department: Option<String>,
    pub position: Option<String>,
}

impl EmployeeRequest {
    /// Build an Employee from this request, with the id supplied by the
    /// caller (None on create, the path id on update).
    pub fn into_employee(self, id: Option<i32>) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            department: self.department,
            position: self.position,
        }
    }
}

/// Generic success envelope: `{ message, statusCode, data }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse<T: Serialize> {
    pub message: String,
    pub status_code: u16,
    pub data: Option<T>,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn with_data(message: impl Into<String>, status: StatusCode, data: T) -> Self {
        Self {
            message: message.into(),
            status_code: status.as_u16(),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(name: &str, email: &str) -> EmployeeRequest {
        EmployeeRequest {
            name: name.to_string(),
            email: email.to_string(),
            department: None,
            position: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("Alice", "alice@example.com").validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = request("", "alice@example.com").validate().unwrap_err();
        assert!(err.to_string().contains("Name must not be blank"));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let err = request("Alice", "not-an-email").validate().unwrap_err();
        assert!(err.to_string().contains("valid email"));
    }

    #[test]
    fn test_into_employee_carries_id() {
        let employee = request("Alice", "alice@example.com").into_employee(Some(7));
        assert_eq!(employee.id, Some(7));
        assert_eq!(employee.name, "Alice");
    }

    #[test]
    fn test_envelope_serializes_status_code_key() {
        let response = SuccessResponse::with_data("ok", StatusCode::CREATED, 42);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 201);
        assert_eq!(json["message"], "ok");
        assert_eq!(json["data"], 42);
    }
}
