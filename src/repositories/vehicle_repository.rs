use crate::models::vehicle::{Vehicle, VehicleStatus, VehicleWithDetail};
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

const SELECT_WITH_DETAIL: &str = r#"
    SELECT v.id, v.license_plate, v.status, v.odometer, v.daily_rate, v.created_at,
           d.id AS detail_id, d.model, d.year, d.category_id, c.name AS category_name
    FROM vehicles v
    JOIN vehicle_details d ON v.detail_id = d.id
    JOIN categories c ON d.category_id = c.id
"#;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT id, detail_id, license_plate, status, odometer, daily_rate, created_at
             FROM vehicles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id_with_detail(
        &self,
        id: Uuid,
    ) -> Result<Option<VehicleWithDetail>, AppError> {
        let query = format!("{} WHERE v.id = $1", SELECT_WITH_DETAIL);
        let vehicle = sqlx::query_as::<_, VehicleWithDetail>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn list_with_detail(&self) -> Result<Vec<VehicleWithDetail>, AppError> {
        let query = format!("{} ORDER BY v.created_at DESC", SELECT_WITH_DETAIL);
        let vehicles = sqlx::query_as::<_, VehicleWithDetail>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    pub async fn license_plate_exists(
        &self,
        license_plate: &str,
        exclude_vehicle: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                 SELECT 1 FROM vehicles
                 WHERE license_plate = $1 AND ($2::uuid IS NULL OR id <> $2)
             )",
        )
        .bind(license_plate)
        .bind(exclude_vehicle)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Alta del detalle y del vehículo en una sola transacción
    pub async fn create(
        &self,
        license_plate: String,
        model: String,
        year: i32,
        category_id: Uuid,
        odometer: Decimal,
        daily_rate: Decimal,
    ) -> Result<Uuid, AppError> {
        let vehicle_id = Uuid::new_v4();
        let detail_id = Uuid::new_v4();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO vehicle_details (id, model, year, category_id)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(detail_id)
        .bind(model)
        .bind(year)
        .bind(category_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO vehicles (id, detail_id, license_plate, status, odometer, daily_rate, created_at)
             VALUES ($1, $2, $3, 'available', $4, $5, $6)",
        )
        .bind(vehicle_id)
        .bind(detail_id)
        .bind(license_plate)
        .bind(odometer)
        .bind(daily_rate)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(vehicle_id)
    }

    /// Actualiza VEHICULO y DETALLE_VEHICULO en una sola transacción
    pub async fn update(
        &self,
        id: Uuid,
        detail_id: Uuid,
        license_plate: String,
        model: String,
        year: i32,
        category_id: Uuid,
        odometer: Decimal,
        daily_rate: Decimal,
        status: VehicleStatus,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "UPDATE vehicle_details SET model = $2, year = $3, category_id = $4 WHERE id = $1",
        )
        .bind(detail_id)
        .bind(model)
        .bind(year)
        .bind(category_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE vehicles
             SET license_plate = $2, odometer = $3, daily_rate = $4, status = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(license_plate)
        .bind(odometer)
        .bind(daily_rate)
        .bind(status)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn update_status(&self, id: Uuid, status: VehicleStatus) -> Result<(), AppError> {
        sqlx::query("UPDATE vehicles SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Baja del vehículo y su detalle (el detalle es propiedad del vehículo)
    pub async fn delete(&self, id: Uuid, detail_id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM vehicle_details WHERE id = $1")
            .bind(detail_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
