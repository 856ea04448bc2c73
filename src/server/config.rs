use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub report_storage_dir: String,
    /// Days before a lot's expiry date at which an expiry warning is raised
    pub expiry_warning_days: i64,
}

const DEFAULT_REPORT_STORAGE_DIR: &str = "reports";
const DEFAULT_EXPIRY_WARNING_DAYS: i64 = 30;

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let report_storage_dir = std::env::var("REPORT_STORAGE_DIR")
            .unwrap_or_else(|_| DEFAULT_REPORT_STORAGE_DIR.to_string());

        let expiry_warning_days = match std::env::var("EXPIRY_WARNING_DAYS") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "EXPIRY_WARNING_DAYS".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_EXPIRY_WARNING_DAYS,
        };

        Ok(Self {
            database_url,
            report_storage_dir,
            expiry_warning_days,
        })
    }
}
