//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod client;
pub mod employee;
pub mod incident;
pub mod lookup;
pub mod maintenance;
pub mod rental;
pub mod vehicle;
