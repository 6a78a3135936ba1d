use axum::{
    routing::{get, patch},
    Router,
};

use crate::config::AppState;
use crate::handlers::{
    booking_options, create_appointment, create_service, delete_appointment, delete_service,
    get_appointment, get_service, health_check, list_appointments, list_services,
    update_appointment, update_appointment_status, update_service,
};

/// Create API router
pub fn create_router(state: AppState) -> Router {
    let service_routes = Router::new()
        .route("/services", get(list_services).post(create_service))
        .route(
            "/services/:id",
            get(get_service).put(update_service).delete(delete_service),
        );

    let appointment_routes = Router::new()
        .route("/appointments", get(list_appointments).post(create_appointment))
        .route("/appointments/options", get(booking_options))
        .route(
            "/appointments/:id",
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment),
        )
        .route("/appointments/:id/status", patch(update_appointment_status));

    Router::new()
        .route("/health", get(health_check))
        .merge(service_routes)
        .merge(appointment_routes)
        .with_state(state)
}
