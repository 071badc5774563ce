use crate::models::rental::{Rental, RentalWithRefs};
use crate::models::vehicle::VehicleStatus;
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

const SELECT_WITH_REFS: &str = r#"
    SELECT r.id, r.vehicle_id, r.client_id, r.employee_id,
           r.start_time, r.end_time, r.total_cost, r.status, r.created_at,
           v.license_plate, d.model AS vehicle_model,
           c.full_name AS client_name, e.full_name AS employee_name
    FROM rentals r
    JOIN vehicles v ON r.vehicle_id = v.id
    JOIN vehicle_details d ON v.detail_id = d.id
    JOIN clients c ON r.client_id = c.id
    JOIN employees e ON r.employee_id = e.id
"#;

pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        client_id: Uuid,
        employee_id: Uuid,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        total_cost: Decimal,
    ) -> Result<Rental, AppError> {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals
                (id, vehicle_id, client_id, employee_id, start_time, end_time,
                 total_cost, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending_start', $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(client_id)
        .bind(employee_id)
        .bind(start_time)
        .bind(end_time)
        .bind(total_cost)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(rental)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Rental>, AppError> {
        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rental)
    }

    pub async fn list_with_refs(&self) -> Result<Vec<RentalWithRefs>, AppError> {
        let query = format!("{} ORDER BY r.start_time DESC", SELECT_WITH_REFS);
        let rentals = sqlx::query_as::<_, RentalWithRefs>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rentals)
    }

    /// Predicado de solapamiento autoritativo del sistema.
    ///
    /// Un alquiler activo (pending_start | in_progress) del vehículo
    /// solapa con [start, end] si ambos extremos se tocan inclusive:
    /// start_time <= end AND end_time >= start. Ninguna otra capa
    /// reimplementa esta aritmética de intervalos.
    pub async fn find_overlapping_active(
        &self,
        vehicle_id: Uuid,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        exclude_rental: Option<Uuid>,
    ) -> Result<Vec<Rental>, AppError> {
        let rentals = sqlx::query_as::<_, Rental>(
            r#"
            SELECT * FROM rentals
            WHERE vehicle_id = $1
              AND status IN ('pending_start', 'in_progress')
              AND start_time <= $3
              AND end_time >= $2
              AND ($4::uuid IS NULL OR id <> $4)
            "#,
        )
        .bind(vehicle_id)
        .bind(start_time)
        .bind(end_time)
        .bind(exclude_rental)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    pub async fn count_active_for_vehicle(&self, vehicle_id: Uuid) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM rentals
             WHERE vehicle_id = $1 AND status IN ('pending_start', 'in_progress')",
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn exists_in_progress_for_vehicle(&self, vehicle_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                 SELECT 1 FROM rentals WHERE vehicle_id = $1 AND status = 'in_progress'
             )",
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        vehicle_id: Uuid,
        client_id: Uuid,
        employee_id: Uuid,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        total_cost: Decimal,
    ) -> Result<Rental, AppError> {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals
            SET vehicle_id = $2, client_id = $3, employee_id = $4,
                start_time = $5, end_time = $6, total_cost = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vehicle_id)
        .bind(client_id)
        .bind(employee_id)
        .bind(start_time)
        .bind(end_time)
        .bind(total_cost)
        .fetch_one(&self.pool)
        .await?;

        Ok(rental)
    }

    /// Activa un alquiler pendiente y marca el vehículo como alquilado,
    /// en una sola transacción.
    pub async fn start(&self, rental_id: Uuid, vehicle_id: Uuid) -> Result<Rental, AppError> {
        let mut tx = self.pool.begin().await?;

        let rental = sqlx::query_as::<_, Rental>(
            "UPDATE rentals SET status = 'in_progress' WHERE id = $1 RETURNING *",
        )
        .bind(rental_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE vehicles SET status = $2 WHERE id = $1")
            .bind(vehicle_id)
            .bind(VehicleStatus::Rented)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(rental)
    }

    /// Cierra el alquiler y actualiza kilometraje + estado del vehículo.
    ///
    /// Ambas escrituras comparten transacción: o se aplican las dos o
    /// ninguna. Una aplicación parcial dejaría costo y vehículo
    /// inconsistentes.
    pub async fn finalize(
        &self,
        rental_id: Uuid,
        end_time: DateTime<Utc>,
        total_cost: Decimal,
        vehicle_id: Uuid,
        final_odometer: Decimal,
    ) -> Result<Rental, AppError> {
        let mut tx = self.pool.begin().await?;

        let rental = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals
            SET end_time = $2, total_cost = $3, status = 'finished'
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(rental_id)
        .bind(end_time)
        .bind(total_cost)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE vehicles SET odometer = $2, status = $3 WHERE id = $1")
            .bind(vehicle_id)
            .bind(final_odometer)
            .bind(VehicleStatus::Available)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(rental)
    }

    /// Cancela el alquiler y libera el vehículo en una sola transacción
    pub async fn cancel(&self, rental_id: Uuid, vehicle_id: Uuid) -> Result<Rental, AppError> {
        let mut tx = self.pool.begin().await?;

        let rental = sqlx::query_as::<_, Rental>(
            "UPDATE rentals SET status = 'cancelled' WHERE id = $1 RETURNING *",
        )
        .bind(rental_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE vehicles SET status = $2 WHERE id = $1")
            .bind(vehicle_id)
            .bind(VehicleStatus::Available)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(rental)
    }
}
