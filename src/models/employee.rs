//! Modelo de Employee

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Employee - mapea a la tabla employees
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: Uuid,
    pub full_name: String,
    pub dni: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
