//! Modelo de Maintenance
//!
//! Registro de mantenimiento de un vehículo. `end_time` en NULL significa
//! mantenimiento en curso (abierto).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Maintenance - mapea a la tabla maintenances
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Maintenance {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub maintenance_type_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub cost: Decimal,
    pub observation: Option<String>,
}

/// Fila de mantenimiento con vehículo y tipo resueltos (JOIN)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MaintenanceWithRefs {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub maintenance_type_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub cost: Decimal,
    pub observation: Option<String>,
    pub license_plate: String,
    pub vehicle_model: String,
    pub maintenance_type: String,
}
