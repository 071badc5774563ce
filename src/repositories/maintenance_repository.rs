use crate::models::maintenance::{Maintenance, MaintenanceWithRefs};
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

const SELECT_WITH_REFS: &str = r#"
    SELECT m.id, m.vehicle_id, m.maintenance_type_id, m.start_time, m.end_time,
           m.cost, m.observation,
           v.license_plate, d.model AS vehicle_model, t.name AS maintenance_type
    FROM maintenances m
    JOIN vehicles v ON m.vehicle_id = v.id
    JOIN vehicle_details d ON v.detail_id = d.id
    JOIN maintenance_types t ON m.maintenance_type_id = t.id
"#;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        maintenance_type_id: Uuid,
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
        cost: Decimal,
        observation: Option<String>,
    ) -> Result<Maintenance, AppError> {
        let maintenance = sqlx::query_as::<_, Maintenance>(
            r#"
            INSERT INTO maintenances
                (id, vehicle_id, maintenance_type_id, start_time, end_time, cost, observation)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(maintenance_type_id)
        .bind(start_time)
        .bind(end_time)
        .bind(cost)
        .bind(observation)
        .fetch_one(&self.pool)
        .await?;

        Ok(maintenance)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Maintenance>, AppError> {
        let maintenance =
            sqlx::query_as::<_, Maintenance>("SELECT * FROM maintenances WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(maintenance)
    }

    pub async fn find_by_id_with_refs(
        &self,
        id: Uuid,
    ) -> Result<Option<MaintenanceWithRefs>, AppError> {
        let query = format!("{} WHERE m.id = $1", SELECT_WITH_REFS);
        let maintenance = sqlx::query_as::<_, MaintenanceWithRefs>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(maintenance)
    }

    pub async fn list_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<MaintenanceWithRefs>, AppError> {
        let query = format!(
            "{} WHERE m.vehicle_id = $1 ORDER BY m.start_time DESC",
            SELECT_WITH_REFS
        );
        let maintenances = sqlx::query_as::<_, MaintenanceWithRefs>(&query)
            .bind(vehicle_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(maintenances)
    }

    /// Mantenimientos del vehículo que cubren el instante dado.
    ///
    /// end_time en NULL se trata como mantenimiento abierto (en curso).
    pub async fn find_overlapping_now(
        &self,
        vehicle_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Maintenance>, AppError> {
        let maintenances = sqlx::query_as::<_, Maintenance>(
            r#"
            SELECT * FROM maintenances
            WHERE vehicle_id = $1
              AND start_time <= $2
              AND (end_time IS NULL OR end_time >= $2)
            "#,
        )
        .bind(vehicle_id)
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        Ok(maintenances)
    }

    pub async fn update(
        &self,
        id: Uuid,
        maintenance_type_id: Uuid,
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
        cost: Decimal,
        observation: Option<String>,
    ) -> Result<Maintenance, AppError> {
        let maintenance = sqlx::query_as::<_, Maintenance>(
            r#"
            UPDATE maintenances
            SET maintenance_type_id = $2, start_time = $3, end_time = $4,
                cost = $5, observation = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(maintenance_type_id)
        .bind(start_time)
        .bind(end_time)
        .bind(cost)
        .bind(observation)
        .fetch_one(&self.pool)
        .await?;

        Ok(maintenance)
    }

    pub async fn finalize(
        &self,
        id: Uuid,
        end_time: DateTime<Utc>,
        cost: Decimal,
    ) -> Result<Maintenance, AppError> {
        let maintenance = sqlx::query_as::<_, Maintenance>(
            "UPDATE maintenances SET end_time = $2, cost = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(end_time)
        .bind(cost)
        .fetch_one(&self.pool)
        .await?;

        Ok(maintenance)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM maintenances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
