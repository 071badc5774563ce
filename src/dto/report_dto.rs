use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::rental::RentalStatus;

// Entrada del ranking de vehículos más alquilados
#[derive(Debug, Serialize, FromRow)]
pub struct VehicleRankingEntry {
    pub license_plate: String,
    pub model: String,
    pub rentals_count: i64,
}

// Facturación de un mes (alquileres finalizados)
#[derive(Debug, Serialize, FromRow)]
pub struct MonthlyRevenueEntry {
    pub month: i32,
    pub total: Decimal,
}

// Entrada del historial detallado de un cliente
#[derive(Debug, Serialize, FromRow)]
pub struct ClientHistoryEntry {
    pub rental_id: Uuid,
    pub model: String,
    pub license_plate: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_cost: Decimal,
    pub status: RentalStatus,
}

// Request del reporte por período
#[derive(Debug, Deserialize)]
pub struct PeriodReportRequest {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

// Entrada del reporte de alquileres iniciados en un período
#[derive(Debug, Serialize, FromRow)]
pub struct PeriodReportEntry {
    pub rental_id: Uuid,
    pub client_name: String,
    pub model: String,
    pub license_plate: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_cost: Decimal,
    pub status: RentalStatus,
}
