use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::dto::{PageRequest, Paginated};
use crate::interceptors::AppResult;
use crate::models::{
    Appointment, AppointmentDetails, AppointmentStatus, AppointmentWithUser, NewAppointment,
    Service, UserSummary,
};

/// Persistence for appointments; related rows are loaded with explicit joins
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Latest appointment date first, optionally restricted to one status
    async fn paginate(
        &self,
        status: Option<AppointmentStatus>,
        page: PageRequest,
    ) -> AppResult<Paginated<AppointmentDetails>>;

    async fn find(&self, id: i64) -> AppResult<Option<Appointment>>;

    async fn find_details(&self, id: i64) -> AppResult<Option<AppointmentDetails>>;

    /// Every appointment of a service with its user
    async fn for_service(&self, service_id: i64) -> AppResult<Vec<AppointmentWithUser>>;

    async fn insert(&self, appointment: NewAppointment) -> AppResult<Appointment>;

    /// Replace every mutable column; `None` when the id is unknown
    async fn update(&self, id: i64, appointment: NewAppointment) -> AppResult<Option<Appointment>>;

    async fn update_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> AppResult<Option<Appointment>>;

    /// `false` when the id is unknown
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

const DETAILS_SELECT: &str = "SELECT a.*,
        s.name AS service_name, s.description AS service_description,
        s.duration AS service_duration, s.price AS service_price,
        s.is_active AS service_is_active, s.created_at AS service_created_at,
        s.updated_at AS service_updated_at,
        u.name AS user_name, u.email AS user_email
    FROM appointments a
    JOIN services s ON s.id = a.service_id
    JOIN users u ON u.id = a.user_id";

#[derive(Debug, FromRow)]
struct DetailsRow {
    #[sqlx(flatten)]
    appointment: Appointment,
    service_name: String,
    service_description: Option<String>,
    service_duration: i32,
    service_price: Decimal,
    service_is_active: bool,
    service_created_at: DateTime<Utc>,
    service_updated_at: DateTime<Utc>,
    user_name: String,
    user_email: String,
}

impl From<DetailsRow> for AppointmentDetails {
    fn from(row: DetailsRow) -> Self {
        let service = Service {
            id: row.appointment.service_id,
            name: row.service_name,
            description: row.service_description,
            duration: row.service_duration,
            price: row.service_price,
            is_active: row.service_is_active,
            created_at: row.service_created_at,
            updated_at: row.service_updated_at,
        };
        let user = UserSummary {
            id: row.appointment.user_id,
            name: row.user_name,
            email: row.user_email,
        };

        AppointmentDetails {
            appointment: row.appointment,
            service,
            user,
        }
    }
}

#[derive(Debug, FromRow)]
struct WithUserRow {
    #[sqlx(flatten)]
    appointment: Appointment,
    user_name: String,
    user_email: String,
}

impl From<WithUserRow> for AppointmentWithUser {
    fn from(row: WithUserRow) -> Self {
        let user = UserSummary {
            id: row.appointment.user_id,
            name: row.user_name,
            email: row.user_email,
        };

        AppointmentWithUser {
            appointment: row.appointment,
            user,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgAppointmentRepository {
    db: PgPool,
}

impl PgAppointmentRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn paginate(
        &self,
        status: Option<AppointmentStatus>,
        page: PageRequest,
    ) -> AppResult<Paginated<AppointmentDetails>> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM appointments
             WHERE ($1::appointment_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.db)
        .await?;

        let query = format!(
            "{} WHERE ($1::appointment_status IS NULL OR a.status = $1)
             ORDER BY a.appointment_date DESC, a.id DESC
             LIMIT $2 OFFSET $3",
            DETAILS_SELECT
        );

        let rows = sqlx::query_as::<_, DetailsRow>(&query)
            .bind(status)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.db)
            .await?;

        let appointments = rows.into_iter().map(AppointmentDetails::from).collect();

        Ok(Paginated::new(appointments, page, total))
    }

    async fn find(&self, id: i64) -> AppResult<Option<Appointment>> {
        let appointment =
            sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.db)
                .await?;

        Ok(appointment)
    }

    async fn find_details(&self, id: i64) -> AppResult<Option<AppointmentDetails>> {
        let query = format!("{} WHERE a.id = $1", DETAILS_SELECT);

        let row = sqlx::query_as::<_, DetailsRow>(&query)
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(row.map(AppointmentDetails::from))
    }

    async fn for_service(&self, service_id: i64) -> AppResult<Vec<AppointmentWithUser>> {
        let rows = sqlx::query_as::<_, WithUserRow>(
            "SELECT a.*, u.name AS user_name, u.email AS user_email
             FROM appointments a
             JOIN users u ON u.id = a.user_id
             WHERE a.service_id = $1
             ORDER BY a.appointment_date DESC, a.id DESC",
        )
        .bind(service_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(AppointmentWithUser::from).collect())
    }

    async fn insert(&self, appointment: NewAppointment) -> AppResult<Appointment> {
        let inserted = sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments
                 (user_id, service_id, appointment_date, status, notes, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
             RETURNING *",
        )
        .bind(appointment.user_id)
        .bind(appointment.service_id)
        .bind(appointment.appointment_date)
        .bind(appointment.status)
        .bind(&appointment.notes)
        .fetch_one(&self.db)
        .await?;

        Ok(inserted)
    }

    async fn update(&self, id: i64, appointment: NewAppointment) -> AppResult<Option<Appointment>> {
        let updated = sqlx::query_as::<_, Appointment>(
            "UPDATE appointments
             SET user_id = $1, service_id = $2, appointment_date = $3, status = $4, notes = $5,
                 updated_at = NOW()
             WHERE id = $6
             RETURNING *",
        )
        .bind(appointment.user_id)
        .bind(appointment.service_id)
        .bind(appointment.appointment_date)
        .bind(appointment.status)
        .bind(&appointment.notes)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(updated)
    }

    async fn update_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> AppResult<Option<Appointment>> {
        let updated = sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET status = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
