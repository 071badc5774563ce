//! Entidades lookup
//!
//! Tablas planas de consulta: categorías de vehículo, tipos de
//! mantenimiento y tipos de incidente. CRUD puro, sin lógica de negocio.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Category - mapea a la tabla categories
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

/// MaintenanceType - mapea a la tabla maintenance_types
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceType {
    pub id: Uuid,
    pub name: String,
}

/// IncidentType - mapea a la tabla incident_types
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IncidentType {
    pub id: Uuid,
    pub name: String,
}
