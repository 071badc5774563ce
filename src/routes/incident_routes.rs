use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::incident_controller::IncidentController;
use crate::dto::incident_dto::{CreateIncidentRequest, IncidentResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_incident_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_incident))
        .route("/rental/:id", get(list_by_rental))
        .route("/:id", delete(delete_incident))
}

async fn create_incident(
    State(state): State<AppState>,
    Json(request): Json<CreateIncidentRequest>,
) -> Result<Json<IncidentResponse>, AppError> {
    let controller = IncidentController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_by_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<IncidentResponse>>, AppError> {
    let controller = IncidentController::new(state.pool.clone());
    let response = controller.list_by_rental(id).await?;
    Ok(Json(response))
}

async fn delete_incident(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = IncidentController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Incidente eliminado exitosamente"
    })))
}
