//! Modelo de Rental
//!
//! Este módulo contiene el struct Rental y la máquina de estados del
//! ciclo de vida de un alquiler.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del alquiler - mapea al ENUM rental_status
///
/// Máquina de estados: PendingStart -> InProgress -> Finished, con
/// Cancelled alcanzable desde ambos estados activos. Finished y
/// Cancelled son terminales.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "rental_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    PendingStart,
    InProgress,
    Finished,
    Cancelled,
}

impl RentalStatus {
    /// Un alquiler activo es el que bloquea la disponibilidad del vehículo
    pub fn is_active(&self) -> bool {
        matches!(self, RentalStatus::PendingStart | RentalStatus::InProgress)
    }

    /// Transiciones válidas de la máquina de estados
    pub fn can_transition_to(&self, next: RentalStatus) -> bool {
        match (self, next) {
            (RentalStatus::PendingStart, RentalStatus::InProgress) => true,
            (RentalStatus::PendingStart, RentalStatus::Finished) => true,
            (RentalStatus::PendingStart, RentalStatus::Cancelled) => true,
            (RentalStatus::InProgress, RentalStatus::Finished) => true,
            (RentalStatus::InProgress, RentalStatus::Cancelled) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::PendingStart => "pending_start",
            RentalStatus::InProgress => "in_progress",
            RentalStatus::Finished => "finished",
            RentalStatus::Cancelled => "cancelled",
        }
    }
}

/// Rental principal - mapea a la tabla rentals
///
/// Referencias no-propietarias a vehículo, cliente y empleado, resueltas
/// por id. El costo total es derivado y se recalcula ante cambios de
/// fechas o de vehículo.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rental {
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

/// Fila de alquiler con las referencias resueltas para listados (JOIN)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RentalWithRefs {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub client_id: Uuid,
    pub employee_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_cost: Decimal,
    pub status: RentalStatus,
    pub created_at: DateTime<Utc>,
    pub license_plate: String,
    pub vehicle_model: String,
    pub client_name: String,
    pub employee_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_states() {
        assert!(RentalStatus::PendingStart.is_active());
        assert!(RentalStatus::InProgress.is_active());
        assert!(!RentalStatus::Finished.is_active());
        assert!(!RentalStatus::Cancelled.is_active());
    }

    #[test]
    fn test_valid_transitions() {
        assert!(RentalStatus::PendingStart.can_transition_to(RentalStatus::InProgress));
        assert!(RentalStatus::PendingStart.can_transition_to(RentalStatus::Cancelled));
        assert!(RentalStatus::InProgress.can_transition_to(RentalStatus::Finished));
        assert!(RentalStatus::InProgress.can_transition_to(RentalStatus::Cancelled));
    }

    #[test]
    fn test_terminal_states_reject_everything() {
        for next in [
            RentalStatus::PendingStart,
            RentalStatus::InProgress,
            RentalStatus::Finished,
            RentalStatus::Cancelled,
        ] {
            assert!(!RentalStatus::Finished.can_transition_to(next));
            assert!(!RentalStatus::Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn test_no_backwards_transition() {
        assert!(!RentalStatus::InProgress.can_transition_to(RentalStatus::PendingStart));
    }
}
