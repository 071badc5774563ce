//! Capa de persistencia
//!
//! Un repositorio por agregado. Toda consulta SQL del sistema vive acá;
//! las capas de arriba nunca arman SQL.

pub mod client_repository;
pub mod employee_repository;
pub mod incident_repository;
pub mod lookup_repository;
pub mod maintenance_repository;
pub mod rental_repository;
pub mod report_repository;
pub mod vehicle_repository;
