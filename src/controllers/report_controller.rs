use crate::dto::report_dto::{
    ClientHistoryEntry, MonthlyRevenueEntry, PeriodReportEntry, PeriodReportRequest,
    VehicleRankingEntry,
};
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::report_repository::ReportRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ReportController {
    repository: ReportRepository,
    client_repository: ClientRepository,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReportRepository::new(pool.clone()),
            client_repository: ClientRepository::new(pool),
        }
    }

    pub async fn vehicle_ranking(&self) -> Result<Vec<VehicleRankingEntry>, AppError> {
        self.repository.vehicle_ranking().await
    }

    pub async fn monthly_revenue(&self, year: i32) -> Result<Vec<MonthlyRevenueEntry>, AppError> {
        if !(2000..=2100).contains(&year) {
            return Err(AppError::BadRequest(format!("año inválido: {}", year)));
        }
        self.repository.monthly_revenue(year).await
    }

    pub async fn client_history(
        &self,
        client_id: Uuid,
    ) -> Result<Vec<ClientHistoryEntry>, AppError> {
        self.client_repository
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cliente {} no encontrado", client_id)))?;

        self.repository.client_history(client_id).await
    }

    pub async fn rentals_in_period(
        &self,
        request: PeriodReportRequest,
    ) -> Result<Vec<PeriodReportEntry>, AppError> {
        if request.to <= request.from {
            return Err(AppError::BadRequest(
                "el parámetro 'to' debe ser posterior a 'from'".to_string(),
            ));
        }
        self.repository.rentals_in_period(request.from, request.to).await
    }
}
