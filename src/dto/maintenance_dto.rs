use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::maintenance::MaintenanceWithRefs;
use crate::models::vehicle::VehicleStatus;

// Request para registrar un mantenimiento (end_time en None = en curso)
#[derive(Debug, Deserialize)]
pub struct CreateMaintenanceRequest {
    pub vehicle_id: Uuid,
    pub maintenance_type_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub cost: f64,
    pub observation: Option<String>,
}

// Request para modificar un mantenimiento
#[derive(Debug, Deserialize)]
pub struct UpdateMaintenanceRequest {
    pub maintenance_type_id: Option<Uuid>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub cost: Option<f64>,
    pub observation: Option<String>,
}

// Request para finalizar un mantenimiento en curso
#[derive(Debug, Deserialize)]
pub struct FinalizeMaintenanceRequest {
    /// Si no se envía, se usa el momento actual
    pub end_time: Option<DateTime<Utc>>,
    pub cost: f64,
}

// Response de mantenimiento con referencias resueltas
#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle: String,
    pub maintenance_type_id: Uuid,
    pub maintenance_type: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub cost: Decimal,
    pub observation: Option<String>,
}

impl From<MaintenanceWithRefs> for MaintenanceResponse {
    fn from(m: MaintenanceWithRefs) -> Self {
        Self {
            id: m.id,
            vehicle_id: m.vehicle_id,
            vehicle: format!("{} - {}", m.license_plate, m.vehicle_model),
            maintenance_type_id: m.maintenance_type_id,
            maintenance_type: m.maintenance_type,
            start_time: m.start_time,
            end_time: m.end_time,
            cost: m.cost,
            observation: m.observation,
        }
    }
}

// Resultado de la resincronización de estado de un vehículo
#[derive(Debug, Serialize)]
pub struct ResyncStatusResponse {
    pub vehicle_id: Uuid,
    pub status: VehicleStatus,
}
