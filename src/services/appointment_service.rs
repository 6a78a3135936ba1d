use chrono::{DateTime, Utc};

use crate::config::AppState;
use crate::dto::{
    BookingOptions, CreateAppointmentRequest, ListAppointmentsQuery, PageRequest, Paginated,
    UpdateAppointmentRequest, UpdateStatusRequest,
};
use crate::interceptors::{AppError, AppResult, ValidationErrors};
use crate::models::{Appointment, AppointmentDetails, AppointmentStatus, NewAppointment};
use crate::utils::{is_after, parse_timestamp, require, require_parsed, Lenient};

/// Appointments are listed fifteen to a page
pub const APPOINTMENTS_PER_PAGE: u32 = 15;

const INVALID_STATUS: &str = "The selected status is invalid.";

/// Appointment lifecycle: booking, edits and status changes.
///
/// Status changes are unrestricted; a completed or cancelled appointment
/// can be moved back to any other status.
#[derive(Clone)]
pub struct AppointmentService {
    state: AppState,
}

impl AppointmentService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// List appointments, latest date first, optionally filtered by status.
    ///
    /// A blank filter lists everything; a filter naming no known status
    /// matches nothing.
    pub async fn list(
        &self,
        query: ListAppointmentsQuery,
    ) -> AppResult<Paginated<AppointmentDetails>> {
        let page = PageRequest::from_query(query.page.as_deref(), APPOINTMENTS_PER_PAGE);

        let status = match query.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match raw.parse::<AppointmentStatus>() {
                Ok(status) => Some(status),
                Err(_) => return Ok(Paginated::empty(page)),
            },
        };

        self.state.appointments.paginate(status, page).await
    }

    /// Active services and users to pick from when booking
    pub async fn booking_options(&self) -> AppResult<BookingOptions> {
        let services = self.state.services.list_active().await?;
        let users = self.state.users.list_by_name().await?;

        Ok(BookingOptions { services, users })
    }

    /// Book a new appointment; it always starts out pending
    pub async fn create(&self, request: CreateAppointmentRequest) -> AppResult<Appointment> {
        self.create_at(request, Utc::now()).await
    }

    pub(crate) async fn create_at(
        &self,
        request: CreateAppointmentRequest,
        now: DateTime<Utc>,
    ) -> AppResult<Appointment> {
        let mut errors = ValidationErrors::new();

        let (user_id, service_id) = self
            .check_references(&mut errors, request.user_id, request.service_id)
            .await?;

        let appointment_date = check_date(&mut errors, request.appointment_date.as_deref());
        if matches!(appointment_date, Some(date) if !is_after(date, now)) {
            errors.add("appointment_date", "The appointment date field must be a date after now.");
        }

        let new_appointment = match (user_id, service_id, appointment_date) {
            (Some(user_id), Some(service_id), Some(appointment_date)) if errors.is_empty() => {
                NewAppointment {
                    user_id,
                    service_id,
                    appointment_date,
                    status: AppointmentStatus::Pending,
                    notes: request.notes,
                }
            }
            _ => return Err(AppError::ValidationError(errors)),
        };

        let appointment = self.state.appointments.insert(new_appointment).await?;

        tracing::info!(
            appointment_id = appointment.id,
            user_id = appointment.user_id,
            service_id = appointment.service_id,
            "Appointment booked"
        );
        Ok(appointment)
    }

    /// Get an appointment with its service and user
    pub async fn get(&self, id: i64) -> AppResult<AppointmentDetails> {
        self.state
            .appointments
            .find_details(id)
            .await?
            .ok_or_else(|| AppError::not_found("Appointment", id))
    }

    /// Replace every mutable field. Past dates are accepted here.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateAppointmentRequest,
    ) -> AppResult<Appointment> {
        self.find_or_fail(id).await?;

        let mut errors = ValidationErrors::new();

        let (user_id, service_id) = self
            .check_references(&mut errors, request.user_id, request.service_id)
            .await?;
        let appointment_date = check_date(&mut errors, request.appointment_date.as_deref());
        let status = check_status(&mut errors, request.status.as_deref());

        let changes = match (user_id, service_id, appointment_date, status) {
            (Some(user_id), Some(service_id), Some(appointment_date), Some(status))
                if errors.is_empty() =>
            {
                NewAppointment {
                    user_id,
                    service_id,
                    appointment_date,
                    status,
                    notes: request.notes,
                }
            }
            _ => return Err(AppError::ValidationError(errors)),
        };

        let appointment = self
            .state
            .appointments
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found("Appointment", id))?;

        tracing::info!(appointment_id = id, status = %appointment.status, "Appointment updated");
        Ok(appointment)
    }

    /// Delete a single appointment
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.state.appointments.delete(id).await? {
            return Err(AppError::not_found("Appointment", id));
        }

        tracing::info!(appointment_id = id, "Appointment deleted");
        Ok(())
    }

    /// Set only the status, from any status to any other
    pub async fn update_status(
        &self,
        id: i64,
        request: UpdateStatusRequest,
    ) -> AppResult<Appointment> {
        let current = self.find_or_fail(id).await?;

        let mut errors = ValidationErrors::new();
        let status = match check_status(&mut errors, request.status.as_deref()) {
            Some(status) if errors.is_empty() => status,
            _ => return Err(AppError::ValidationError(errors)),
        };

        let appointment = self
            .state
            .appointments
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::not_found("Appointment", id))?;

        tracing::info!(
            appointment_id = id,
            from = %current.status,
            to = %appointment.status,
            "Appointment status changed"
        );
        Ok(appointment)
    }

    async fn find_or_fail(&self, id: i64) -> AppResult<Appointment> {
        self.state
            .appointments
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found("Appointment", id))
    }

    /// Both references must name existing rows at write time
    async fn check_references(
        &self,
        errors: &mut ValidationErrors,
        user_id: Option<Lenient<i64>>,
        service_id: Option<Lenient<i64>>,
    ) -> AppResult<(Option<i64>, Option<i64>)> {
        let user_id = match require_parsed(errors, "user_id", user_id, "an integer") {
            Some(id) => {
                if self.state.users.exists(id).await? {
                    Some(id)
                } else {
                    errors.add("user_id", "The selected user id is invalid.");
                    None
                }
            }
            None => None,
        };

        let service_id = match require_parsed(errors, "service_id", service_id, "an integer") {
            Some(id) => {
                if self.state.services.exists(id).await? {
                    Some(id)
                } else {
                    errors.add("service_id", "The selected service id is invalid.");
                    None
                }
            }
            None => None,
        };

        Ok((user_id, service_id))
    }
}

fn check_date(errors: &mut ValidationErrors, raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = require(errors, "appointment_date", raw)?;
    let parsed = parse_timestamp(raw);
    if parsed.is_none() {
        errors.add("appointment_date", "The appointment date field must be a valid date.");
    }
    parsed
}

fn check_status(errors: &mut ValidationErrors, raw: Option<&str>) -> Option<AppointmentStatus> {
    let raw = require(errors, "status", raw)?;
    match raw.parse() {
        Ok(status) => Some(status),
        Err(_) => {
            errors.add("status", INVALID_STATUS);
            None
        }
    }
}
