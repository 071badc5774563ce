use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::dto::maintenance_dto::{
    CreateMaintenanceRequest, FinalizeMaintenanceRequest, MaintenanceResponse,
    UpdateMaintenanceRequest,
};
use crate::services::maintenance_service::MaintenanceService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_maintenance))
        .route("/vehicle/:id", get(list_by_vehicle))
        .route("/:id", put(update_maintenance))
        .route("/:id", delete(delete_maintenance))
        .route("/:id/finalize", post(finalize_maintenance))
}

async fn create_maintenance(
    State(state): State<AppState>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<Json<MaintenanceResponse>, AppError> {
    let service = MaintenanceService::new(state.pool.clone());
    let response = service.create(request).await?;
    Ok(Json(response))
}

async fn list_by_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MaintenanceResponse>>, AppError> {
    let service = MaintenanceService::new(state.pool.clone());
    let response = service.list_by_vehicle(id).await?;
    Ok(Json(response))
}

async fn update_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMaintenanceRequest>,
) -> Result<Json<MaintenanceResponse>, AppError> {
    let service = MaintenanceService::new(state.pool.clone());
    let response = service.update(id, request).await?;
    Ok(Json(response))
}

async fn finalize_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FinalizeMaintenanceRequest>,
) -> Result<Json<MaintenanceResponse>, AppError> {
    let service = MaintenanceService::new(state.pool.clone());
    let response = service.finalize(id, request).await?;
    Ok(Json(response))
}

async fn delete_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let service = MaintenanceService::new(state.pool.clone());
    service.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Mantenimiento eliminado exitosamente"
    })))
}
