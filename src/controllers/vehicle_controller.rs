use crate::dto::common_dto::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::repositories::lookup_repository::LookupRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::validation::validate_license_plate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
    lookup_repository: LookupRepository,
    rental_repository: RentalRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            lookup_repository: LookupRepository::new(pool.clone()),
            rental_repository: RentalRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        validate_license_plate(&request.license_plate)
            .map_err(|_| AppError::BadRequest("formato de patente inválido".to_string()))?;

        self.lookup_repository
            .find_category(request.category_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Categoría {} no encontrada", request.category_id))
            })?;

        let license_plate = request.license_plate.trim().to_uppercase();
        if self
            .repository
            .license_plate_exists(&license_plate, None)
            .await?
        {
            return Err(conflict_error("Vehículo", "patente", &license_plate));
        }

        let odometer = parse_amount(request.odometer.unwrap_or(0.0), "kilometraje")?;
        let daily_rate = parse_amount(request.daily_rate, "costo diario")?;
        if daily_rate <= Decimal::ZERO {
            return Err(AppError::BadRequest(
                "el costo diario debe ser positivo".to_string(),
            ));
        }

        let vehicle_id = self
            .repository
            .create(
                license_plate,
                request.model,
                request.year,
                request.category_id,
                odometer,
                daily_rate,
            )
            .await?;

        let response = self.get_by_id(vehicle_id).await?;

        Ok(ApiResponse::success_with_message(
            response,
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id_with_detail(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehículo {} no encontrado", id)))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.list_with_detail().await?;
        Ok(vehicles.into_iter().map(Into::into).collect())
    }

    /// Edita la tabla de vehículos y su detalle en una sola operación
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id_with_detail(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehículo {} no encontrado", id)))?;

        let license_plate = match request.license_plate {
            Some(plate) => {
                validate_license_plate(&plate).map_err(|_| {
                    AppError::BadRequest("formato de patente inválido".to_string())
                })?;
                let plate = plate.trim().to_uppercase();
                if plate != current.license_plate
                    && self.repository.license_plate_exists(&plate, Some(id)).await?
                {
                    return Err(conflict_error("Vehículo", "patente", &plate));
                }
                plate
            }
            None => current.license_plate.clone(),
        };

        let category_id = request.category_id.unwrap_or(current.category_id);
        if category_id != current.category_id {
            self.lookup_repository
                .find_category(category_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Categoría {} no encontrada", category_id))
                })?;
        }

        let odometer = match request.odometer {
            Some(km) => parse_amount(km, "kilometraje")?,
            None => current.odometer,
        };
        let daily_rate = match request.daily_rate {
            Some(rate) => {
                let rate = parse_amount(rate, "costo diario")?;
                if rate <= Decimal::ZERO {
                    return Err(AppError::BadRequest(
                        "el costo diario debe ser positivo".to_string(),
                    ));
                }
                rate
            }
            None => current.daily_rate,
        };

        self.repository
            .update(
                id,
                current.detail_id,
                license_plate,
                request.model.unwrap_or(current.model),
                request.year.unwrap_or(current.year),
                category_id,
                odometer,
                daily_rate,
                request.status.unwrap_or(current.status),
            )
            .await?;

        let response = self.get_by_id(id).await?;

        Ok(ApiResponse::success_with_message(
            response,
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    /// Baja del vehículo, rechazada mientras tenga alquileres activos
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehículo {} no encontrado", id)))?;

        let active_rentals = self.rental_repository.count_active_for_vehicle(id).await?;
        if active_rentals > 0 {
            return Err(AppError::Conflict(format!(
                "el vehículo {} tiene {} alquiler(es) activo(s)",
                vehicle.license_plate, active_rentals
            )));
        }

        self.repository.delete(id, vehicle.detail_id).await?;

        Ok(())
    }
}

fn parse_amount(value: f64, field: &str) -> Result<Decimal, AppError> {
    let amount = Decimal::from_f64_retain(value)
        .ok_or_else(|| AppError::BadRequest(format!("{} inválido", field)))?;
    if amount < Decimal::ZERO {
        return Err(AppError::BadRequest(format!(
            "{} no puede ser negativo",
            field
        )));
    }
    Ok(amount)
}
