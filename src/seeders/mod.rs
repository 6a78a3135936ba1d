//! Demo catalogue and bookings, inserted once into an empty database.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use rust_decimal::Decimal;

use crate::config::AppState;
use crate::interceptors::AppResult;
use crate::models::{AppointmentStatus, NewAppointment, NewService};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub services: usize,
    pub appointments: usize,
}

struct DemoService {
    name: &'static str,
    description: &'static str,
    duration: i32,
    price_cents: i64,
    is_active: bool,
}

const DEMO_SERVICES: [DemoService; 8] = [
    DemoService {
        name: "Haircut",
        description: "Professional haircut, wash included",
        duration: 30,
        price_cents: 2500,
        is_active: true,
    },
    DemoService {
        name: "Colouring",
        description: "Full colour with premium products",
        duration: 120,
        price_cents: 8000,
        is_active: true,
    },
    DemoService {
        name: "Manicure",
        description: "Complete hand nail treatment",
        duration: 45,
        price_cents: 2000,
        is_active: true,
    },
    DemoService {
        name: "Pedicure",
        description: "Complete foot nail treatment",
        duration: 60,
        price_cents: 3000,
        is_active: true,
    },
    DemoService {
        name: "Relaxing Massage",
        description: "Full body relaxation massage",
        duration: 60,
        price_cents: 5000,
        is_active: true,
    },
    DemoService {
        name: "Facial Treatment",
        description: "Deep cleanse and facial care",
        duration: 90,
        price_cents: 6500,
        is_active: true,
    },
    DemoService {
        name: "Waxing",
        description: "Hair removal with warm wax",
        duration: 45,
        price_cents: 3500,
        is_active: true,
    },
    DemoService {
        name: "Event Styling",
        description: "Professional styling for special events",
        duration: 90,
        price_cents: 7000,
        is_active: false,
    },
];

/// (day offset from today, hour, minute, status, notes)
const DEMO_APPOINTMENTS: [(i64, u32, u32, AppointmentStatus, Option<&str>); 10] = [
    (-5, 10, 0, AppointmentStatus::Completed, Some("Client happy with the result")),
    (-3, 14, 30, AppointmentStatus::Completed, None),
    (-2, 16, 0, AppointmentStatus::Cancelled, Some("Cancelled for personal reasons")),
    (2, 11, 0, AppointmentStatus::Confirmed, Some("First visit")),
    (3, 15, 30, AppointmentStatus::Confirmed, None),
    (4, 10, 30, AppointmentStatus::Confirmed, Some("Regular client")),
    (5, 13, 0, AppointmentStatus::Pending, Some("Awaiting confirmation")),
    (7, 16, 0, AppointmentStatus::Pending, None),
    (10, 9, 0, AppointmentStatus::Pending, Some("Asked for a morning slot")),
    (14, 17, 30, AppointmentStatus::Pending, None),
];

/// Seed the demo data unless services already exist.
///
/// Appointments are written straight to the repository so past dates and
/// non-pending statuses can be represented; they are skipped when there
/// are no users to book them for.
pub async fn seed_demo_data(state: &AppState, now: DateTime<Utc>) -> AppResult<SeedSummary> {
    if state.services.count().await? > 0 {
        tracing::info!("Services already present, skipping demo data");
        return Ok(SeedSummary::default());
    }

    let mut active_ids = Vec::new();
    for demo in &DEMO_SERVICES {
        let service = state
            .services
            .insert(NewService {
                name: demo.name.to_string(),
                description: Some(demo.description.to_string()),
                duration: demo.duration,
                price: Decimal::new(demo.price_cents, 2),
                is_active: demo.is_active,
            })
            .await?;
        if service.is_active {
            active_ids.push(service.id);
        }
    }

    let users = state.users.list_by_name().await?;
    if users.is_empty() {
        tracing::warn!("No users available, demo appointments not created");
        return Ok(SeedSummary {
            services: DEMO_SERVICES.len(),
            appointments: 0,
        });
    }

    for (index, (days, hour, minute, status, notes)) in DEMO_APPOINTMENTS.iter().enumerate() {
        let time = NaiveTime::from_hms_opt(*hour, *minute, 0).unwrap_or(NaiveTime::MIN);
        let appointment_date = (now + Duration::days(*days)).date_naive().and_time(time).and_utc();

        state
            .appointments
            .insert(NewAppointment {
                user_id: users[index % users.len()].id,
                service_id: active_ids[index % active_ids.len()],
                appointment_date,
                status: *status,
                notes: notes.map(str::to_string),
            })
            .await?;
    }

    let summary = SeedSummary {
        services: DEMO_SERVICES.len(),
        appointments: DEMO_APPOINTMENTS.len(),
    };
    tracing::info!(
        services = summary.services,
        appointments = summary.appointments,
        "Demo data seeded"
    );
    Ok(summary)
}
