use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::client::Client;

// Request para dar de alta un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 2, max = 150))]
    pub full_name: String,

    pub dni: String,

    #[validate(length(min = 6, max = 30))]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
}

// Request para modificar un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[validate(length(min = 2, max = 150))]
    pub full_name: Option<String>,

    pub dni: Option<String>,

    #[validate(length(min = 6, max = 30))]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
}

// Response de cliente
#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: Uuid,
    pub full_name: String,
    pub dni: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Client> for ClientResponse {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            full_name: c.full_name,
            dni: c.dni,
            phone: c.phone,
            email: c.email,
            created_at: c.created_at,
        }
    }
}
