use crate::dto::incident_dto::{CreateIncidentRequest, IncidentResponse};
use crate::repositories::incident_repository::IncidentRepository;
use crate::repositories::lookup_repository::LookupRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::utils::errors::AppError;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct IncidentController {
    repository: IncidentRepository,
    rental_repository: RentalRepository,
    lookup_repository: LookupRepository,
}

impl IncidentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: IncidentRepository::new(pool.clone()),
            rental_repository: RentalRepository::new(pool.clone()),
            lookup_repository: LookupRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateIncidentRequest,
    ) -> Result<IncidentResponse, AppError> {
        request.validate()?;

        self.rental_repository
            .find_by_id(request.rental_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Alquiler {} no encontrado", request.rental_id))
            })?;
        self.lookup_repository
            .find_incident_type(request.incident_type_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Tipo de incidente {} no encontrado",
                    request.incident_type_id
                ))
            })?;

        let cost = match request.cost {
            Some(c) => {
                let cost = Decimal::from_f64_retain(c)
                    .ok_or_else(|| AppError::BadRequest("costo inválido".to_string()))?;
                if cost < Decimal::ZERO {
                    return Err(AppError::BadRequest(
                        "el costo no puede ser negativo".to_string(),
                    ));
                }
                Some(cost)
            }
            None => None,
        };

        let incident = self
            .repository
            .create(
                request.rental_id,
                request.incident_type_id,
                request.occurred_at,
                request.description,
                cost,
            )
            .await?;

        let incident = self
            .repository
            .find_by_id_with_refs(incident.id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Incidente {} no encontrado", incident.id))
            })?;

        Ok(incident.into())
    }

    pub async fn list_by_rental(
        &self,
        rental_id: Uuid,
    ) -> Result<Vec<IncidentResponse>, AppError> {
        self.rental_repository
            .find_by_id(rental_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Alquiler {} no encontrado", rental_id)))?;

        let incidents = self.repository.list_by_rental(rental_id).await?;
        Ok(incidents.into_iter().map(Into::into).collect())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Incidente {} no encontrado", id)))?;

        self.repository.delete(id).await?;

        Ok(())
    }
}
