use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::lookup_controller::LookupController;
use crate::dto::lookup_dto::{CreateLookupRequest, StatusEntry};
use crate::models::lookup::{Category, IncidentType, MaintenanceType};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_lookup_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/maintenance-types",
            get(list_maintenance_types).post(create_maintenance_type),
        )
        .route(
            "/incident-types",
            get(list_incident_types).post(create_incident_type),
        )
        .route("/statuses/:scope", get(statuses_by_scope))
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let controller = LookupController::new(state.pool.clone());
    let response = controller.list_categories().await?;
    Ok(Json(response))
}

async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateLookupRequest>,
) -> Result<Json<Category>, AppError> {
    let controller = LookupController::new(state.pool.clone());
    let response = controller.create_category(request).await?;
    Ok(Json(response))
}

async fn list_maintenance_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaintenanceType>>, AppError> {
    let controller = LookupController::new(state.pool.clone());
    let response = controller.list_maintenance_types().await?;
    Ok(Json(response))
}

async fn create_maintenance_type(
    State(state): State<AppState>,
    Json(request): Json<CreateLookupRequest>,
) -> Result<Json<MaintenanceType>, AppError> {
    let controller = LookupController::new(state.pool.clone());
    let response = controller.create_maintenance_type(request).await?;
    Ok(Json(response))
}

async fn list_incident_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<IncidentType>>, AppError> {
    let controller = LookupController::new(state.pool.clone());
    let response = controller.list_incident_types().await?;
    Ok(Json(response))
}

async fn create_incident_type(
    State(state): State<AppState>,
    Json(request): Json<CreateLookupRequest>,
) -> Result<Json<IncidentType>, AppError> {
    let controller = LookupController::new(state.pool.clone());
    let response = controller.create_incident_type(request).await?;
    Ok(Json(response))
}

async fn statuses_by_scope(
    Path(scope): Path<String>,
) -> Result<Json<Vec<StatusEntry>>, AppError> {
    let response = LookupController::statuses_by_scope(&scope)?;
    Ok(Json(response))
}
