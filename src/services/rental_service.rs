//! Servicio de alquileres
//!
//! Acá vive la lógica de negocio central del sistema: la verificación de
//! disponibilidad de vehículos y el ciclo de vida de un alquiler
//! (PendingStart -> InProgress -> Finished, con Cancelled desde cualquier
//! estado activo). Las operaciones validan primero y persisten después;
//! ningún fallo de validación deja escrituras a medias.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::rental_dto::{
    AvailabilityQuery, AvailabilityResponse, CreateRentalRequest, FinalizeRentalRequest,
    RentalListResponse, RentalResponse, UpdateRentalRequest,
};
use crate::models::rental::{Rental, RentalStatus};
use crate::models::vehicle::Vehicle;
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::employee_repository::EmployeeRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

/// Tolerancia de reloj al validar que el inicio no quede en el pasado
const CLOCK_SKEW_TOLERANCE_SECS: i64 = 300;

const SECONDS_PER_DAY: i64 = 86_400;

/// Días de facturación de un período: duración real en días con la
/// fracción redondeando hacia arriba, mínimo un día.
pub(crate) fn rental_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let secs = (end - start).num_seconds();
    if secs <= 0 {
        return 1;
    }
    (secs + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
}

/// Costo total del alquiler: días de facturación por tarifa diaria
pub(crate) fn compute_total_cost(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    daily_rate: Decimal,
) -> Decimal {
    Decimal::from(rental_days(start, end)) * daily_rate
}

/// Un cambio de vehículo o de fechas exige re-verificar disponibilidad y
/// recalcular el costo; un cambio sólo de cliente o empleado no.
pub(crate) fn requires_availability_recheck(
    current: &Rental,
    vehicle_id: Uuid,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> bool {
    vehicle_id != current.vehicle_id
        || start_time != current.start_time
        || end_time != current.end_time
}

/// Valida la ventana temporal de un alquiler nuevo
pub(crate) fn validate_window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    if end <= start {
        return Err(AppError::InvalidWindow(
            "la fecha de fin debe ser posterior a la de inicio".to_string(),
        ));
    }
    if start < now - Duration::seconds(CLOCK_SKEW_TOLERANCE_SECS) {
        return Err(AppError::InvalidWindow(
            "la fecha de inicio ya pasó".to_string(),
        ));
    }
    Ok(())
}

pub struct RentalService {
    repository: RentalRepository,
    vehicle_repository: VehicleRepository,
    client_repository: ClientRepository,
    employee_repository: EmployeeRepository,
}

impl RentalService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RentalRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool.clone()),
            client_repository: ClientRepository::new(pool.clone()),
            employee_repository: EmployeeRepository::new(pool),
        }
    }

    /// Consulta de disponibilidad (lectura pura, sin efectos)
    pub async fn check_availability(
        &self,
        query: AvailabilityQuery,
    ) -> Result<AvailabilityResponse, AppError> {
        let reason = match self.vehicle_repository.find_by_id(query.vehicle_id).await? {
            None => Some(format!("el vehículo {} no existe", query.vehicle_id)),
            Some(vehicle) => {
                match self
                    .ensure_available(&vehicle, query.start_time, query.end_time, None)
                    .await
                {
                    Ok(()) => None,
                    Err(AppError::VehicleUnavailable(reason)) => Some(reason),
                    Err(e) => return Err(e),
                }
            }
        };

        Ok(AvailabilityResponse {
            vehicle_id: query.vehicle_id,
            start_time: query.start_time,
            end_time: query.end_time,
            available: reason.is_none(),
            reason,
        })
    }

    /// Registra un alquiler nuevo en estado pendiente.
    ///
    /// El alta NO marca el vehículo como alquilado: el estado del
    /// vehículo cambia recién al activarse el alquiler.
    pub async fn create(&self, request: CreateRentalRequest) -> Result<RentalResponse, AppError> {
        let vehicle = self
            .vehicle_repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Vehículo {} no encontrado", request.vehicle_id))
            })?;
        self.client_repository
            .find_by_id(request.client_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Cliente {} no encontrado", request.client_id))
            })?;
        self.employee_repository
            .find_by_id(request.employee_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Empleado {} no encontrado", request.employee_id))
            })?;

        validate_window(request.start_time, request.end_time, Utc::now())?;
        self.ensure_available(&vehicle, request.start_time, request.end_time, None)
            .await?;

        let total_cost = compute_total_cost(request.start_time, request.end_time, vehicle.daily_rate);

        let rental = self
            .repository
            .create(
                request.vehicle_id,
                request.client_id,
                request.employee_id,
                request.start_time,
                request.end_time,
                total_cost,
            )
            .await?;

        info!(
            "Alquiler {} registrado para el vehículo {} ({} - {})",
            rental.id, vehicle.license_plate, rental.start_time, rental.end_time
        );

        Ok(rental.into())
    }

    /// Modifica un subconjunto de campos de un alquiler activo.
    ///
    /// Si cambian el vehículo o las fechas se vuelve a verificar la
    /// disponibilidad (excluyendo este mismo alquiler) y se recalcula el
    /// costo. Un cambio sólo de cliente o empleado no dispara ninguna de
    /// las dos cosas.
    pub async fn modify(
        &self,
        rental_id: Uuid,
        request: UpdateRentalRequest,
    ) -> Result<RentalResponse, AppError> {
        let current = self
            .repository
            .find_by_id(rental_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Alquiler {} no encontrado", rental_id)))?;

        if !current.status.is_active() {
            return Err(AppError::InvalidStateTransition(format!(
                "el alquiler {} no admite cambios en estado {}",
                rental_id,
                current.status.as_str()
            )));
        }

        let vehicle_id = request.vehicle_id.unwrap_or(current.vehicle_id);
        let client_id = request.client_id.unwrap_or(current.client_id);
        let employee_id = request.employee_id.unwrap_or(current.employee_id);
        let start_time = request.start_time.unwrap_or(current.start_time);
        let end_time = request.end_time.unwrap_or(current.end_time);

        if client_id != current.client_id {
            self.client_repository
                .find_by_id(client_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Cliente {} no encontrado", client_id))
                })?;
        }
        if employee_id != current.employee_id {
            self.employee_repository
                .find_by_id(employee_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Empleado {} no encontrado", employee_id))
                })?;
        }

        let needs_recheck =
            requires_availability_recheck(&current, vehicle_id, start_time, end_time);

        let total_cost = if needs_recheck {
            let vehicle = self
                .vehicle_repository
                .find_by_id(vehicle_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Vehículo {} no encontrado", vehicle_id))
                })?;

            if end_time <= start_time {
                return Err(AppError::InvalidWindow(
                    "la fecha de fin debe ser posterior a la de inicio".to_string(),
                ));
            }

            self.ensure_available(&vehicle, start_time, end_time, Some(rental_id))
                .await?;

            compute_total_cost(start_time, end_time, vehicle.daily_rate)
        } else {
            current.total_cost
        };

        let rental = self
            .repository
            .update(
                rental_id,
                vehicle_id,
                client_id,
                employee_id,
                start_time,
                end_time,
                total_cost,
            )
            .await?;

        Ok(rental.into())
    }

    /// Activa un alquiler pendiente: el vehículo pasa a alquilado
    pub async fn start(&self, rental_id: Uuid) -> Result<RentalResponse, AppError> {
        let rental = self
            .repository
            .find_by_id(rental_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Alquiler {} no encontrado", rental_id)))?;

        if !rental.status.can_transition_to(RentalStatus::InProgress) {
            return Err(AppError::InvalidStateTransition(format!(
                "el alquiler {} no puede activarse desde el estado {}",
                rental_id,
                rental.status.as_str()
            )));
        }

        let rental = self.repository.start(rental.id, rental.vehicle_id).await?;

        info!("Alquiler {} activado", rental.id);

        Ok(rental.into())
    }

    /// Cierra un alquiler activo con el kilometraje de devolución.
    ///
    /// Fija la fecha de fin en ahora, recalcula el costo y en una única
    /// transacción pasa el alquiler a finalizado y el vehículo a
    /// disponible con su kilometraje nuevo. Una segunda invocación sobre
    /// un alquiler ya finalizado falla, nunca es un éxito silencioso.
    pub async fn finalize(
        &self,
        rental_id: Uuid,
        request: FinalizeRentalRequest,
    ) -> Result<RentalResponse, AppError> {
        let rental = self
            .repository
            .find_by_id(rental_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Alquiler {} no encontrado", rental_id)))?;

        if !rental.status.can_transition_to(RentalStatus::Finished) {
            return Err(AppError::InvalidStateTransition(format!(
                "el alquiler {} no puede finalizarse desde el estado {}",
                rental_id,
                rental.status.as_str()
            )));
        }

        let vehicle = self
            .vehicle_repository
            .find_by_id(rental.vehicle_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Vehículo {} no encontrado", rental.vehicle_id))
            })?;

        let final_odometer = Decimal::from_f64_retain(request.final_odometer)
            .ok_or_else(|| AppError::BadRequest("kilometraje final inválido".to_string()))?;

        if final_odometer < vehicle.odometer {
            return Err(AppError::BadRequest(format!(
                "el kilometraje final ({}) no puede ser menor al actual ({})",
                final_odometer, vehicle.odometer
            )));
        }

        let end_time = Utc::now();
        let total_cost = compute_total_cost(rental.start_time, end_time, vehicle.daily_rate);

        let rental = self
            .repository
            .finalize(rental.id, end_time, total_cost, vehicle.id, final_odometer)
            .await?;

        info!(
            "Alquiler {} finalizado, costo total {}",
            rental.id, rental.total_cost
        );

        Ok(rental.into())
    }

    /// Cancela un alquiler activo y libera el vehículo
    pub async fn cancel(&self, rental_id: Uuid) -> Result<RentalResponse, AppError> {
        let rental = self
            .repository
            .find_by_id(rental_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Alquiler {} no encontrado", rental_id)))?;

        if !rental.status.can_transition_to(RentalStatus::Cancelled) {
            return Err(AppError::InvalidStateTransition(format!(
                "el alquiler {} no puede cancelarse desde el estado {}",
                rental_id,
                rental.status.as_str()
            )));
        }

        let rental = self.repository.cancel(rental.id, rental.vehicle_id).await?;

        info!("Alquiler {} cancelado", rental.id);

        Ok(rental.into())
    }

    pub async fn get(&self, rental_id: Uuid) -> Result<RentalResponse, AppError> {
        let rental = self
            .repository
            .find_by_id(rental_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Alquiler {} no encontrado", rental_id)))?;

        Ok(rental.into())
    }

    pub async fn list(&self) -> Result<Vec<RentalListResponse>, AppError> {
        let rentals = self.repository.list_with_refs().await?;
        Ok(rentals.into_iter().map(Into::into).collect())
    }

    /// Verifica que el vehículo pueda reservarse en [start, end].
    ///
    /// Falla si el vehículo está en mantenimiento (sin importar fechas) o
    /// si algún alquiler activo se solapa según el predicado autoritativo
    /// del repositorio. No reimplementa la aritmética de intervalos.
    async fn ensure_available(
        &self,
        vehicle: &Vehicle,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        exclude_rental: Option<Uuid>,
    ) -> Result<(), AppError> {
        if !vehicle.status.is_operational() {
            return Err(AppError::VehicleUnavailable(format!(
                "el vehículo {} está en mantenimiento",
                vehicle.license_plate
            )));
        }

        let overlapping = self
            .repository
            .find_overlapping_active(vehicle.id, start_time, end_time, exclude_rental)
            .await?;

        if !overlapping.is_empty() {
            return Err(AppError::VehicleUnavailable(format!(
                "el vehículo {} tiene alquileres activos que se solapan con el período pedido",
                vehicle.license_plate
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_two_exact_days_cost() {
        // 2024-01-01 10:00 -> 2024-01-03 10:00 a tarifa 100: dos días justos
        let start = dt(2024, 1, 1, 10, 0);
        let end = dt(2024, 1, 3, 10, 0);
        assert_eq!(rental_days(start, end), 2);
        assert_eq!(
            compute_total_cost(start, end, Decimal::from(100)),
            Decimal::from(200)
        );
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let start = dt(2024, 1, 1, 10, 0);
        let end = dt(2024, 1, 3, 11, 0);
        assert_eq!(rental_days(start, end), 3);
        assert_eq!(
            compute_total_cost(start, end, Decimal::from(100)),
            Decimal::from(300)
        );
    }

    #[test]
    fn test_short_rental_charges_one_day() {
        let start = dt(2024, 1, 1, 10, 0);
        let end = dt(2024, 1, 1, 12, 0);
        assert_eq!(rental_days(start, end), 1);
        assert_eq!(
            compute_total_cost(start, end, Decimal::from(100)),
            Decimal::from(100)
        );
    }

    #[test]
    fn test_window_end_before_start_rejected() {
        let now = dt(2024, 1, 1, 0, 0);
        let result = validate_window(dt(2024, 1, 5, 0, 0), dt(2024, 1, 3, 0, 0), now);
        assert!(matches!(result, Err(AppError::InvalidWindow(_))));
    }

    #[test]
    fn test_window_equal_bounds_rejected() {
        let now = dt(2024, 1, 1, 0, 0);
        let t = dt(2024, 1, 5, 0, 0);
        assert!(matches!(
            validate_window(t, t, now),
            Err(AppError::InvalidWindow(_))
        ));
    }

    #[test]
    fn test_window_start_in_past_rejected() {
        let now = dt(2024, 1, 10, 12, 0);
        let result = validate_window(dt(2024, 1, 10, 11, 0), dt(2024, 1, 12, 0, 0), now);
        assert!(matches!(result, Err(AppError::InvalidWindow(_))));
    }

    #[test]
    fn test_window_within_clock_skew_accepted() {
        // Inicio dos minutos en el pasado: dentro de la tolerancia
        let now = dt(2024, 1, 10, 12, 0);
        let result = validate_window(dt(2024, 1, 10, 11, 58), dt(2024, 1, 12, 0, 0), now);
        assert!(result.is_ok());
    }

    fn sample_rental() -> Rental {
        Rental {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            start_time: dt(2024, 1, 1, 10, 0),
            end_time: dt(2024, 1, 3, 10, 0),
            total_cost: Decimal::from(200),
            status: RentalStatus::PendingStart,
            created_at: dt(2023, 12, 30, 9, 0),
        }
    }

    #[test]
    fn test_reference_only_change_skips_recheck() {
        // Cambiar cliente o empleado no toca vehículo ni fechas
        let rental = sample_rental();
        assert!(!requires_availability_recheck(
            &rental,
            rental.vehicle_id,
            rental.start_time,
            rental.end_time
        ));
    }

    #[test]
    fn test_vehicle_or_date_change_forces_recheck() {
        let rental = sample_rental();
        assert!(requires_availability_recheck(
            &rental,
            Uuid::new_v4(),
            rental.start_time,
            rental.end_time
        ));
        assert!(requires_availability_recheck(
            &rental,
            rental.vehicle_id,
            rental.start_time,
            dt(2024, 1, 4, 10, 0)
        ));
    }
}
