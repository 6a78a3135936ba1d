pub mod app_config;
pub mod app_state;
pub mod database;

pub use app_config::AppConfig;
pub use app_state::AppState;
pub use database::{run_migrations, DatabaseConfig};
