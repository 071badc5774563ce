//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle, su detalle 1:1 y el enum de
//! estado operacional. Mapea al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado operacional del vehículo - mapea al ENUM vehicle_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    Rented,
    InMaintenance,
}

impl VehicleStatus {
    /// Un vehículo en mantenimiento no puede reservarse, sin importar fechas
    pub fn is_operational(&self) -> bool {
        !matches!(self, VehicleStatus::InMaintenance)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Rented => "rented",
            VehicleStatus::InMaintenance => "in_maintenance",
        }
    }
}

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub detail_id: Uuid,
    pub license_plate: String,
    pub status: VehicleStatus,
    pub odometer: Decimal,
    pub daily_rate: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Fila de vehículo con su detalle y categoría resueltos (JOIN).
///
/// El detalle (modelo, año, categoría) vive en la tabla vehicle_details,
/// 1:1 y propiedad del vehículo; nunca se carga suelto.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VehicleWithDetail {
    pub id: Uuid,
    pub license_plate: String,
    pub status: VehicleStatus,
    pub odometer: Decimal,
    pub daily_rate: Decimal,
    pub created_at: DateTime<Utc>,
    pub detail_id: Uuid,
    pub model: String,
    pub year: i32,
    pub category_id: Uuid,
    pub category_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operational_statuses() {
        assert!(VehicleStatus::Available.is_operational());
        assert!(VehicleStatus::Rented.is_operational());
        assert!(!VehicleStatus::InMaintenance.is_operational());
    }
}
