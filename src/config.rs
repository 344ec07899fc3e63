use crate::error::config::ConfigError;

/// Runtime configuration read from the environment.
pub struct Config {
    pub address: String,
    pub database_url: String,
    pub valkey_url: String,
    pub workers: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let workers = match std::env::var("BILLHOURS_WORKERS") {
            Ok(value) => value
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue("BILLHOURS_WORKERS".to_string()))?,
            Err(_) => 4,
        };

        Ok(Self {
            address: std::env::var("BILLHOURS_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingVariable("DATABASE_URL".to_string()))?,
            valkey_url: std::env::var("VALKEY_URL")
                .map_err(|_| ConfigError::MissingVariable("VALKEY_URL".to_string()))?,
            workers,
        })
    }
}
