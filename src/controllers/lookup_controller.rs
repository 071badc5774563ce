use crate::dto::lookup_dto::{CreateLookupRequest, StatusEntry};
use crate::models::lookup::{Category, IncidentType, MaintenanceType};
use crate::repositories::lookup_repository::LookupRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

pub struct LookupController {
    repository: LookupRepository,
}

impl LookupController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LookupRepository::new(pool),
        }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.repository.list_categories().await
    }

    pub async fn create_category(
        &self,
        request: CreateLookupRequest,
    ) -> Result<Category, AppError> {
        request.validate()?;
        self.repository.create_category(request.name).await
    }

    pub async fn list_maintenance_types(&self) -> Result<Vec<MaintenanceType>, AppError> {
        self.repository.list_maintenance_types().await
    }

    pub async fn create_maintenance_type(
        &self,
        request: CreateLookupRequest,
    ) -> Result<MaintenanceType, AppError> {
        request.validate()?;
        self.repository.create_maintenance_type(request.name).await
    }

    pub async fn list_incident_types(&self) -> Result<Vec<IncidentType>, AppError> {
        self.repository.list_incident_types().await
    }

    pub async fn create_incident_type(
        &self,
        request: CreateLookupRequest,
    ) -> Result<IncidentType, AppError> {
        request.validate()?;
        self.repository.create_incident_type(request.name).await
    }

    /// Estados válidos por ámbito. Reemplaza la vieja tabla de estados:
    /// los valores salen de los enums del dominio.
    pub fn statuses_by_scope(scope: &str) -> Result<Vec<StatusEntry>, AppError> {
        match scope {
            "vehicle" => Ok(vec![
                StatusEntry { value: "available", label: "Disponible" },
                StatusEntry { value: "rented", label: "Alquilado" },
                StatusEntry { value: "in_maintenance", label: "En mantenimiento" },
            ]),
            "rental" => Ok(vec![
                StatusEntry { value: "pending_start", label: "Pendiente de inicio" },
                StatusEntry { value: "in_progress", label: "En curso" },
                StatusEntry { value: "finished", label: "Finalizado" },
                StatusEntry { value: "cancelled", label: "Cancelado" },
            ]),
            other => Err(AppError::NotFound(format!(
                "Ámbito '{}' no encontrado",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statuses_by_scope() {
        assert_eq!(LookupController::statuses_by_scope("vehicle").unwrap().len(), 3);
        assert_eq!(LookupController::statuses_by_scope("rental").unwrap().len(), 4);
        assert!(LookupController::statuses_by_scope("otro").is_err());
    }
}
