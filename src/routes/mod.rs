pub mod car_routes;
pub mod location_routes;

use axum::Router;

use crate::state::AppState;

/// Router principal de la API. Las capas (CORS, trace) y el estado
/// se aplican en main.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/locations", location_routes::create_location_router())
        .nest("/car", car_routes::create_car_router())
}
