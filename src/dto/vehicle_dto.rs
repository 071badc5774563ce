use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{VehicleStatus, VehicleWithDetail};

// Request para crear un vehículo (crea el detalle y luego el vehículo)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub license_plate: String,

    #[validate(length(min = 2, max = 100))]
    pub model: String,

    #[validate(range(min = 1950, max = 2030))]
    pub year: i32,

    pub category_id: Uuid,

    pub odometer: Option<f64>,

    pub daily_rate: f64,
}

// Request para actualizar un vehículo (tabla vehicles y vehicle_details)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    pub license_plate: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1950, max = 2030))]
    pub year: Option<i32>,

    pub category_id: Option<Uuid>,

    pub odometer: Option<f64>,

    pub daily_rate: Option<f64>,

    pub status: Option<VehicleStatus>,
}

// Response de vehículo con detalle y categoría resueltos
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub license_plate: String,
    pub status: VehicleStatus,
    pub odometer: Decimal,
    pub daily_rate: Decimal,
    pub model: String,
    pub year: i32,
    pub category_id: Uuid,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<VehicleWithDetail> for VehicleResponse {
    fn from(v: VehicleWithDetail) -> Self {
        Self {
            id: v.id,
            license_plate: v.license_plate,
            status: v.status,
            odometer: v.odometer,
            daily_rate: v.daily_rate,
            model: v.model,
            year: v.year,
            category_id: v.category_id,
            category: v.category_name,
            created_at: v.created_at,
        }
    }
}
