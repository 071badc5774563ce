use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::{
    ClientHistoryEntry, MonthlyRevenueEntry, PeriodReportEntry, PeriodReportRequest,
    VehicleRankingEntry,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/ranking", get(vehicle_ranking))
        .route("/revenue/:year", get(monthly_revenue))
        .route("/client/:id", get(client_history))
        .route("/period", post(rentals_in_period))
}

async fn vehicle_ranking(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleRankingEntry>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.vehicle_ranking().await?;
    Ok(Json(response))
}

async fn monthly_revenue(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<Vec<MonthlyRevenueEntry>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.monthly_revenue(year).await?;
    Ok(Json(response))
}

async fn client_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ClientHistoryEntry>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.client_history(id).await?;
    Ok(Json(response))
}

async fn rentals_in_period(
    State(state): State<AppState>,
    Json(request): Json<PeriodReportRequest>,
) -> Result<Json<Vec<PeriodReportEntry>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.rentals_in_period(request).await?;
    Ok(Json(response))
}
