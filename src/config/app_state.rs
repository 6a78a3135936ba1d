use std::sync::Arc;
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::repositories::{
    AppointmentRepository, PgAppointmentRepository, PgServiceRepository, PgUserDirectory,
    ServiceRepository, UserDirectory,
};

/// Application state shared across all handlers and services
#[derive(Clone)]
pub struct AppState {
    /// Service catalogue storage
    pub services: Arc<dyn ServiceRepository>,
    /// Appointment storage
    pub appointments: Arc<dyn AppointmentRepository>,
    /// Externally managed user accounts (existence + display data)
    pub users: Arc<dyn UserDirectory>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create AppState backed by PostgreSQL
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        Self {
            services: Arc::new(PgServiceRepository::new(db.clone())),
            appointments: Arc::new(PgAppointmentRepository::new(db.clone())),
            users: Arc::new(PgUserDirectory::new(db)),
            config: Arc::new(config),
        }
    }

    /// Create AppState from arbitrary storage implementations
    #[cfg(test)]
    pub fn with_repositories(
        services: Arc<dyn ServiceRepository>,
        appointments: Arc<dyn AppointmentRepository>,
        users: Arc<dyn UserDirectory>,
        config: AppConfig,
    ) -> Self {
        Self {
            services,
            appointments,
            users,
            config: Arc::new(config),
        }
    }
}
