//! Fixtures shared by unit tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::config::{AppConfig, AppState};
use crate::models::{
    Appointment, AppointmentDetails, AppointmentStatus, NewAppointment, NewService, Service,
    UserSummary,
};
use crate::repositories::{MockAppointmentRepository, MockServiceRepository, MockUserDirectory};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap()
}

pub fn haircut() -> NewService {
    NewService {
        name: "Haircut".to_string(),
        description: Some("Cut and wash".to_string()),
        duration: 30,
        price: Decimal::new(2500, 2),
        is_active: true,
    }
}

pub fn service(id: i64) -> Service {
    haircut().into_service(id, fixed_now())
}

pub fn user(id: i64) -> UserSummary {
    UserSummary {
        id,
        name: format!("User {}", id),
        email: format!("user{}@example.com", id),
    }
}

pub fn appointment(id: i64, service_id: i64, status: AppointmentStatus) -> Appointment {
    NewAppointment {
        user_id: 7,
        service_id,
        appointment_date: fixed_now() + chrono::Duration::hours(id),
        status,
        notes: None,
    }
    .into_appointment(id, fixed_now())
}

pub fn details(id: i64, status: AppointmentStatus) -> AppointmentDetails {
    AppointmentDetails {
        appointment: appointment(id, 1, status),
        service: service(1),
        user: user(7),
    }
}

pub fn state(
    services: MockServiceRepository,
    appointments: MockAppointmentRepository,
    users: MockUserDirectory,
) -> AppState {
    AppState::with_repositories(
        Arc::new(services),
        Arc::new(appointments),
        Arc::new(users),
        AppConfig::default(),
    )
}

/// Insert a user row directly; accounts have no repository of their own
pub async fn insert_user(pool: &sqlx::PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(format!("{}@example.com", name.to_lowercase()))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn booking_at(
    user_id: i64,
    service_id: i64,
    days_ahead: i64,
    status: AppointmentStatus,
) -> NewAppointment {
    NewAppointment {
        user_id,
        service_id,
        appointment_date: fixed_now() + chrono::Duration::days(days_ahead),
        status,
        notes: None,
    }
}
