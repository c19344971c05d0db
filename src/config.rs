use std::env;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("neither DATABASE_URL nor DB_SECRET_JSON is set")]
    MissingDatabaseConfig,
    #[error("invalid database secret payload: {0}")]
    InvalidSecret(#[from] serde_json::Error),
    #[error("PORT must be a valid number: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),
}

/// Shape of the JSON secret payload the deployment stores in its secret
/// manager. Field names match the stored keys, hence the renames.
#[derive(Debug, Deserialize)]
pub struct DbSecret {
    #[serde(rename = "DB_USER")]
    pub user: String,
    #[serde(rename = "DB_PASSWORD")]
    pub password: String,
    #[serde(rename = "DB_NAME")]
    pub name: String,
    #[serde(rename = "DB_HOST")]
    pub host: String,
    #[serde(rename = "DB_PORT")]
    pub port: String,
}

impl DbSecret {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode=disable",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Resolve configuration from the environment. `DATABASE_URL` wins when
    /// set; otherwise the connection URL is assembled from the JSON secret
    /// payload in `DB_SECRET_JSON`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let raw = env::var("DB_SECRET_JSON")
                    .map_err(|_| ConfigError::MissingDatabaseConfig)?;
                DbSecret::from_json(&raw)?.database_url()
            }
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        Ok(AppConfig {
            database_url,
            host,
            port,
        })
    }
}
