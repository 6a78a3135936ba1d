use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub app_name: String,
    pub app_version: String,
    /// Insert the demo catalogue on startup when the services table is empty
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Self::from_config(&cfg)
    }

    fn from_config(cfg: &config::Config) -> Result<Self, config::ConfigError> {
        let port = match cfg.get_int("PORT") {
            Ok(port) => u16::try_from(port).map_err(|_| {
                config::ConfigError::Message(format!("PORT {} is outside 0..=65535", port))
            })?,
            Err(config::ConfigError::NotFound(_)) => 3000,
            Err(e) => return Err(e),
        };

        Ok(Self {
            host: cfg.get_string("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            environment: cfg
                .get_string("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            app_name: cfg
                .get_string("APP_NAME")
                .unwrap_or_else(|_| "appointment-booking".to_string()),
            app_version: cfg.get_string("APP_VERSION").unwrap_or_else(|_| "0.1.0".to_string()),
            seed_demo_data: cfg.get_bool("SEED_DEMO_DATA").unwrap_or(false),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            environment: "development".to_string(),
            app_name: "appointment-booking".to_string(),
            app_version: "0.1.0".to_string(),
            seed_demo_data: false,
        }
    }
}
