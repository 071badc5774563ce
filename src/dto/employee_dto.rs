use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::employee::Employee;

// Request para dar de alta un empleado
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 2, max = 150))]
    pub full_name: String,

    pub dni: String,

    #[validate(email)]
    pub email: String,
}

// Request para modificar un empleado
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 2, max = 150))]
    pub full_name: Option<String>,

    pub dni: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
}

// Response de empleado
#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub full_name: String,
    pub dni: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            full_name: e.full_name,
            dni: e.dni,
            email: e.email,
            created_at: e.created_at,
        }
    }
}
