use axum::extract::{Query, State};

use crate::config::AppState;
use crate::dto::{
    BookingOptions, CreateAppointmentRequest, ListAppointmentsQuery, Paginated,
    UpdateAppointmentRequest, UpdateStatusRequest,
};
use crate::interceptors::{ApiSuccess, AppError, PathId, Payload};
use crate::models::{Appointment, AppointmentDetails};
use crate::services::AppointmentService;

/// List appointments, optionally by status
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(query): Query<ListAppointmentsQuery>,
) -> Result<ApiSuccess<Paginated<AppointmentDetails>>, AppError> {
    let appointment_service = AppointmentService::new(state);
    let appointments = appointment_service.list(query).await?;

    Ok(ApiSuccess::new("Appointments retrieved successfully", appointments))
}

/// Services and users available for booking
pub async fn booking_options(
    State(state): State<AppState>,
) -> Result<ApiSuccess<BookingOptions>, AppError> {
    let appointment_service = AppointmentService::new(state);
    let options = appointment_service.booking_options().await?;

    Ok(ApiSuccess::new("Booking options retrieved successfully", options))
}

/// Book an appointment
pub async fn create_appointment(
    State(state): State<AppState>,
    Payload(request): Payload<CreateAppointmentRequest>,
) -> Result<ApiSuccess<Appointment>, AppError> {
    let appointment_service = AppointmentService::new(state);
    let appointment = appointment_service.create(request).await?;

    Ok(ApiSuccess::created("Appointment created successfully", appointment))
}

/// Get an appointment
pub async fn get_appointment(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<ApiSuccess<AppointmentDetails>, AppError> {
    let appointment_service = AppointmentService::new(state);
    let appointment = appointment_service.get(id).await?;

    Ok(ApiSuccess::new("Appointment retrieved successfully", appointment))
}

/// Update an appointment
pub async fn update_appointment(
    State(state): State<AppState>,
    PathId(id): PathId,
    Payload(request): Payload<UpdateAppointmentRequest>,
) -> Result<ApiSuccess<Appointment>, AppError> {
    let appointment_service = AppointmentService::new(state);
    let appointment = appointment_service.update(id, request).await?;

    Ok(ApiSuccess::new("Appointment updated successfully", appointment))
}

/// Delete an appointment
pub async fn delete_appointment(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<ApiSuccess<()>, AppError> {
    let appointment_service = AppointmentService::new(state);
    appointment_service.delete(id).await?;

    Ok(ApiSuccess::<()>::new_without_data("Appointment deleted successfully"))
}

/// Change only the status of an appointment
pub async fn update_appointment_status(
    State(state): State<AppState>,
    PathId(id): PathId,
    Payload(request): Payload<UpdateStatusRequest>,
) -> Result<ApiSuccess<Appointment>, AppError> {
    let appointment_service = AppointmentService::new(state);
    let appointment = appointment_service.update_status(id, request).await?;

    Ok(ApiSuccess::new("Appointment status updated", appointment))
}
