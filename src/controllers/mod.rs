//! Controllers
//!
//! Capa de negocio del ABM por entidad. La lógica con reglas de
//! consistencia entre entidades (alquileres y mantenimientos) vive en
//! `services`; acá queda el CRUD con sus validaciones.

pub mod client_controller;
pub mod employee_controller;
pub mod incident_controller;
pub mod lookup_controller;
pub mod report_controller;
pub mod vehicle_controller;
