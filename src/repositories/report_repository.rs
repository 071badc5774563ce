use crate::dto::report_dto::{
    ClientHistoryEntry, MonthlyRevenueEntry, PeriodReportEntry, VehicleRankingEntry,
};
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Consultas de agregación para reportes
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Top 5 de vehículos más alquilados
    pub async fn vehicle_ranking(&self) -> Result<Vec<VehicleRankingEntry>, AppError> {
        let ranking = sqlx::query_as::<_, VehicleRankingEntry>(
            r#"
            SELECT v.license_plate, d.model, COUNT(r.id) AS rentals_count
            FROM rentals r
            JOIN vehicles v ON r.vehicle_id = v.id
            JOIN vehicle_details d ON v.detail_id = d.id
            GROUP BY v.id, v.license_plate, d.model
            ORDER BY rentals_count DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(ranking)
    }

    /// Facturación por mes de un año (sólo alquileres finalizados)
    pub async fn monthly_revenue(&self, year: i32) -> Result<Vec<MonthlyRevenueEntry>, AppError> {
        let revenue = sqlx::query_as::<_, MonthlyRevenueEntry>(
            r#"
            SELECT EXTRACT(MONTH FROM r.end_time)::int4 AS month,
                   SUM(r.total_cost) AS total
            FROM rentals r
            WHERE EXTRACT(YEAR FROM r.end_time)::int4 = $1
              AND r.status = 'finished'
            GROUP BY month
            ORDER BY month
            "#,
        )
        .bind(year)
        .fetch_all(&self.pool)
        .await?;

        Ok(revenue)
    }

    /// Historial detallado de alquileres de un cliente
    pub async fn client_history(
        &self,
        client_id: Uuid,
    ) -> Result<Vec<ClientHistoryEntry>, AppError> {
        let history = sqlx::query_as::<_, ClientHistoryEntry>(
            r#"
            SELECT r.id AS rental_id, d.model, v.license_plate,
                   r.start_time, r.end_time, r.total_cost, r.status
            FROM rentals r
            JOIN vehicles v ON r.vehicle_id = v.id
            JOIN vehicle_details d ON v.detail_id = d.id
            WHERE r.client_id = $1
            ORDER BY r.start_time DESC
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(history)
    }

    /// Alquileres iniciados dentro de un rango de fechas
    pub async fn rentals_in_period(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<PeriodReportEntry>, AppError> {
        let rentals = sqlx::query_as::<_, PeriodReportEntry>(
            r#"
            SELECT r.id AS rental_id, c.full_name AS client_name, d.model, v.license_plate,
                   r.start_time, r.end_time, r.total_cost, r.status
            FROM rentals r
            JOIN clients c ON r.client_id = c.id
            JOIN vehicles v ON r.vehicle_id = v.id
            JOIN vehicle_details d ON v.detail_id = d.id
            WHERE r.start_time BETWEEN $1 AND $2
            ORDER BY r.start_time
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }
}
