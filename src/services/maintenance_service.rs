//! Servicio de mantenimientos
//!
//! Orquesta el ABM de mantenimientos y el sincronizador de estado del
//! vehículo: cada alta, modificación, finalización o baja de un
//! mantenimiento recalcula el estado operacional del vehículo afectado.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::maintenance_dto::{
    CreateMaintenanceRequest, FinalizeMaintenanceRequest, MaintenanceResponse,
    UpdateMaintenanceRequest,
};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::lookup_repository::LookupRepository;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

/// Estado operacional que corresponde al vehículo según sus señales.
///
/// Un mantenimiento que cubre el presente gana siempre; si no hay
/// mantenimiento en curso, un alquiler en curso implica alquilado. El
/// sincronizador nunca pisa un vehículo alquilado con "disponible".
pub(crate) fn derive_vehicle_status(
    in_maintenance: bool,
    has_rental_in_progress: bool,
) -> VehicleStatus {
    if in_maintenance {
        VehicleStatus::InMaintenance
    } else if has_rental_in_progress {
        VehicleStatus::Rented
    } else {
        VehicleStatus::Available
    }
}

/// Valida la ventana de un mantenimiento (fin nulo = en curso)
pub(crate) fn validate_maintenance_window(
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    if let Some(end) = end_time {
        if end <= start_time {
            return Err(AppError::InvalidWindow(
                "la fecha de fin del mantenimiento debe ser posterior a la de inicio".to_string(),
            ));
        }
    }
    Ok(())
}

pub struct MaintenanceService {
    repository: MaintenanceRepository,
    vehicle_repository: VehicleRepository,
    rental_repository: RentalRepository,
    lookup_repository: LookupRepository,
}

impl MaintenanceService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool.clone()),
            rental_repository: RentalRepository::new(pool.clone()),
            lookup_repository: LookupRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateMaintenanceRequest,
    ) -> Result<MaintenanceResponse, AppError> {
        self.vehicle_repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Vehículo {} no encontrado", request.vehicle_id))
            })?;
        self.lookup_repository
            .find_maintenance_type(request.maintenance_type_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Tipo de mantenimiento {} no encontrado",
                    request.maintenance_type_id
                ))
            })?;

        validate_maintenance_window(request.start_time, request.end_time)?;
        let cost = parse_cost(request.cost)?;

        let maintenance = self
            .repository
            .create(
                request.vehicle_id,
                request.maintenance_type_id,
                request.start_time,
                request.end_time,
                cost,
                request.observation,
            )
            .await?;

        let status = self.resync_vehicle_status(maintenance.vehicle_id).await?;
        info!(
            "Mantenimiento {} registrado, vehículo {} queda {}",
            maintenance.id,
            maintenance.vehicle_id,
            status.as_str()
        );

        self.get(maintenance.id).await
    }

    pub async fn update(
        &self,
        maintenance_id: Uuid,
        request: UpdateMaintenanceRequest,
    ) -> Result<MaintenanceResponse, AppError> {
        let current = self
            .repository
            .find_by_id(maintenance_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Mantenimiento {} no encontrado", maintenance_id))
            })?;

        let maintenance_type_id = request
            .maintenance_type_id
            .unwrap_or(current.maintenance_type_id);
        if maintenance_type_id != current.maintenance_type_id {
            self.lookup_repository
                .find_maintenance_type(maintenance_type_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!(
                        "Tipo de mantenimiento {} no encontrado",
                        maintenance_type_id
                    ))
                })?;
        }

        let start_time = request.start_time.unwrap_or(current.start_time);
        let end_time = request.end_time.or(current.end_time);
        validate_maintenance_window(start_time, end_time)?;

        let cost = match request.cost {
            Some(c) => parse_cost(c)?,
            None => current.cost,
        };
        let observation = request.observation.or(current.observation);

        self.repository
            .update(
                maintenance_id,
                maintenance_type_id,
                start_time,
                end_time,
                cost,
                observation,
            )
            .await?;

        self.resync_vehicle_status(current.vehicle_id).await?;

        self.get(maintenance_id).await
    }

    /// Cierra un mantenimiento en curso con su costo final
    pub async fn finalize(
        &self,
        maintenance_id: Uuid,
        request: FinalizeMaintenanceRequest,
    ) -> Result<MaintenanceResponse, AppError> {
        let current = self
            .repository
            .find_by_id(maintenance_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Mantenimiento {} no encontrado", maintenance_id))
            })?;

        if current.end_time.is_some() {
            return Err(AppError::InvalidStateTransition(format!(
                "el mantenimiento {} ya está finalizado",
                maintenance_id
            )));
        }

        let end_time = request.end_time.unwrap_or_else(Utc::now);
        validate_maintenance_window(current.start_time, Some(end_time))?;
        let cost = parse_cost(request.cost)?;

        self.repository
            .finalize(maintenance_id, end_time, cost)
            .await?;

        let status = self.resync_vehicle_status(current.vehicle_id).await?;
        info!(
            "Mantenimiento {} finalizado, vehículo {} queda {}",
            maintenance_id,
            current.vehicle_id,
            status.as_str()
        );

        self.get(maintenance_id).await
    }

    pub async fn delete(&self, maintenance_id: Uuid) -> Result<(), AppError> {
        let current = self
            .repository
            .find_by_id(maintenance_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Mantenimiento {} no encontrado", maintenance_id))
            })?;

        self.repository.delete(maintenance_id).await?;
        self.resync_vehicle_status(current.vehicle_id).await?;

        Ok(())
    }

    pub async fn get(&self, maintenance_id: Uuid) -> Result<MaintenanceResponse, AppError> {
        let maintenance = self
            .repository
            .find_by_id_with_refs(maintenance_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Mantenimiento {} no encontrado", maintenance_id))
            })?;

        Ok(maintenance.into())
    }

    pub async fn list_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<MaintenanceResponse>, AppError> {
        self.vehicle_repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehículo {} no encontrado", vehicle_id)))?;

        let maintenances = self.repository.list_by_vehicle(vehicle_id).await?;
        Ok(maintenances.into_iter().map(Into::into).collect())
    }

    /// Recalcula y persiste el estado operacional del vehículo
    pub async fn resync_vehicle_status(
        &self,
        vehicle_id: Uuid,
    ) -> Result<VehicleStatus, AppError> {
        self.vehicle_repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehículo {} no encontrado", vehicle_id)))?;

        let in_maintenance = !self
            .repository
            .find_overlapping_now(vehicle_id, Utc::now())
            .await?
            .is_empty();
        let has_rental_in_progress = self
            .rental_repository
            .exists_in_progress_for_vehicle(vehicle_id)
            .await?;

        let status = derive_vehicle_status(in_maintenance, has_rental_in_progress);
        self.vehicle_repository
            .update_status(vehicle_id, status)
            .await?;

        Ok(status)
    }
}

fn parse_cost(cost: f64) -> Result<Decimal, AppError> {
    let cost = Decimal::from_f64_retain(cost)
        .ok_or_else(|| AppError::BadRequest("costo inválido".to_string()))?;
    if cost < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "el costo no puede ser negativo".to_string(),
        ));
    }
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_maintenance_wins_over_everything() {
        assert_eq!(
            derive_vehicle_status(true, false),
            VehicleStatus::InMaintenance
        );
        assert_eq!(
            derive_vehicle_status(true, true),
            VehicleStatus::InMaintenance
        );
    }

    #[test]
    fn test_resync_does_not_clobber_rented() {
        // Vehículo con alquiler en curso y sin mantenimiento: queda alquilado
        assert_eq!(derive_vehicle_status(false, true), VehicleStatus::Rented);
    }

    #[test]
    fn test_idle_vehicle_becomes_available() {
        assert_eq!(derive_vehicle_status(false, false), VehicleStatus::Available);
    }

    #[test]
    fn test_open_window_is_valid() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        assert!(validate_maintenance_window(start, None).is_ok());
    }

    #[test]
    fn test_closed_window_must_end_after_start() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 2, 28, 9, 0, 0).unwrap();
        assert!(matches!(
            validate_maintenance_window(start, Some(end)),
            Err(AppError::InvalidWindow(_))
        ));
        assert!(validate_maintenance_window(
            start,
            Some(Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap())
        )
        .is_ok());
    }
}
