//! Modelo de Incident
//!
//! Incidente asociado a un alquiler (daño, multa, siniestro, etc.).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Incident - mapea a la tabla incidents
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Incident {
    pub id: Uuid,
    pub rental_id: Uuid,
    pub incident_type_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub description: String,
    pub cost: Option<Decimal>,
}

/// Fila de incidente con el tipo resuelto (JOIN)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct IncidentWithRefs {
    pub id: Uuid,
    pub rental_id: Uuid,
    pub incident_type_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub description: String,
    pub cost: Option<Decimal>,
    pub incident_type: String,
}
