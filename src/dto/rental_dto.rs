use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::rental::{Rental, RentalStatus, RentalWithRefs};

// Request para registrar un alquiler
#[derive(Debug, Deserialize)]
pub struct CreateRentalRequest {
    pub vehicle_id: Uuid,
    pub client_id: Uuid,
    pub employee_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

// Request para modificar un alquiler (subconjunto de campos)
#[derive(Debug, Deserialize)]
pub struct UpdateRentalRequest {
    pub vehicle_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub employee_id: Option<Uuid>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

// Request para finalizar un alquiler con el kilometraje de devolución
#[derive(Debug, Deserialize)]
pub struct FinalizeRentalRequest {
    pub final_odometer: f64,
}

// Query de consulta de disponibilidad
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub vehicle_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

// Resultado de la consulta de disponibilidad
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub vehicle_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

// Response de alquiler
#[derive(Debug, Serialize)]
pub struct RentalResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub client_id: Uuid,
    pub employee_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_cost: Decimal,
    pub status: RentalStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Rental> for RentalResponse {
    fn from(r: Rental) -> Self {
        Self {
            id: r.id,
            vehicle_id: r.vehicle_id,
            client_id: r.client_id,
            employee_id: r.employee_id,
            start_time: r.start_time,
            end_time: r.end_time,
            total_cost: r.total_cost,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

// Response de alquiler para listados, con nombres anidados para la tabla
#[derive(Debug, Serialize)]
pub struct RentalListResponse {
    pub id: Uuid,
    pub vehicle: String,
    pub client: String,
    pub employee: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_cost: Decimal,
    pub status: RentalStatus,
}

impl From<RentalWithRefs> for RentalListResponse {
    fn from(r: RentalWithRefs) -> Self {
        Self {
            id: r.id,
            vehicle: format!("{} - {}", r.license_plate, r.vehicle_model),
            client: r.client_name,
            employee: r.employee_name,
            start_time: r.start_time,
            end_time: r.end_time,
            total_cost: r.total_cost,
            status: r.status,
        }
    }
}
