use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::location_controller::LocationController;
use crate::dto::location_dto::{
    ApiResponse, AvailabilityResponse, CheckAvailabilityRequest, CreateLocationRequest,
    LocationWithCarResponse, UpdateLocationRequest,
};
use crate::models::Location;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_location_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_location))
        .route("/", get(list_locations))
        .route("/check", post(check_availability))
        .route("/:id", get(get_location))
        .route("/:id", put(update_location))
        .route("/:id", delete(delete_location))
        .route("/:id/demarrer", post(start_location))
        .route("/:id/terminer", post(end_location))
}

async fn create_location(
    State(state): State<AppState>,
    Json(request): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<Location>), AppError> {
    let controller = LocationController::new(state.pool.clone());
    let location = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationWithCarResponse>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}

async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Location>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let location = controller.get_by_id(id).await?;
    Ok(Json(location))
}

async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateLocationRequest>,
) -> Result<Json<ApiResponse<Location>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let location = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        location,
        "Location updated successfully".to_string(),
    )))
}

async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Location deleted successfully"
    })))
}

async fn check_availability(
    State(state): State<AppState>,
    Json(request): Json<CheckAvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.check_availability(request).await?;
    Ok(Json(response))
}

async fn start_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Location>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let location = controller.start(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        location,
        "Location started successfully".to_string(),
    )))
}

async fn end_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Location>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let location = controller.end(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        location,
        "Location ended successfully".to_string(),
    )))
}
