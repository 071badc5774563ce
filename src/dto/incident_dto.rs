use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::incident::IncidentWithRefs;

// Request para registrar un incidente sobre un alquiler
#[derive(Debug, Deserialize, Validate)]
pub struct CreateIncidentRequest {
    pub rental_id: Uuid,
    pub incident_type_id: Uuid,
    pub occurred_at: DateTime<Utc>,

    #[validate(length(min = 3, max = 500))]
    pub description: String,

    pub cost: Option<f64>,
}

// Response de incidente con el tipo resuelto
#[derive(Debug, Serialize)]
pub struct IncidentResponse {
    pub id: Uuid,
    pub rental_id: Uuid,
    pub incident_type_id: Uuid,
    pub incident_type: String,
    pub occurred_at: DateTime<Utc>,
    pub description: String,
    pub cost: Option<Decimal>,
}

impl From<IncidentWithRefs> for IncidentResponse {
    fn from(i: IncidentWithRefs) -> Self {
        Self {
            id: i.id,
            rental_id: i.rental_id,
            incident_type_id: i.incident_type_id,
            incident_type: i.incident_type,
            occurred_at: i.occurred_at,
            description: i.description,
            cost: i.cost,
        }
    }
}
