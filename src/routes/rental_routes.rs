use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::dto::rental_dto::{
    AvailabilityQuery, AvailabilityResponse, CreateRentalRequest, FinalizeRentalRequest,
    RentalListResponse, RentalResponse, UpdateRentalRequest,
};
use crate::services::rental_service::RentalService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rental_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_rental))
        .route("/", get(list_rentals))
        .route("/availability", get(check_availability))
        .route("/:id", get(get_rental))
        .route("/:id", put(modify_rental))
        .route("/:id/start", post(start_rental))
        .route("/:id/finalize", post(finalize_rental))
        .route("/:id/cancel", post(cancel_rental))
}

async fn create_rental(
    State(state): State<AppState>,
    Json(request): Json<CreateRentalRequest>,
) -> Result<Json<RentalResponse>, AppError> {
    let service = RentalService::new(state.pool.clone());
    let response = service.create(request).await?;
    Ok(Json(response))
}

async fn list_rentals(
    State(state): State<AppState>,
) -> Result<Json<Vec<RentalListResponse>>, AppError> {
    let service = RentalService::new(state.pool.clone());
    let response = service.list().await?;
    Ok(Json(response))
}

async fn get_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RentalResponse>, AppError> {
    let service = RentalService::new(state.pool.clone());
    let response = service.get(id).await?;
    Ok(Json(response))
}

async fn modify_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRentalRequest>,
) -> Result<Json<RentalResponse>, AppError> {
    let service = RentalService::new(state.pool.clone());
    let response = service.modify(id, request).await?;
    Ok(Json(response))
}

async fn start_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RentalResponse>, AppError> {
    let service = RentalService::new(state.pool.clone());
    let response = service.start(id).await?;
    Ok(Json(response))
}

async fn finalize_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FinalizeRentalRequest>,
) -> Result<Json<RentalResponse>, AppError> {
    let service = RentalService::new(state.pool.clone());
    let response = service.finalize(id, request).await?;
    Ok(Json(response))
}

async fn cancel_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RentalResponse>, AppError> {
    let service = RentalService::new(state.pool.clone());
    let response = service.cancel(id).await?;
    Ok(Json(response))
}

async fn check_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let service = RentalService::new(state.pool.clone());
    let response = service.check_availability(query).await?;
    Ok(Json(response))
}
