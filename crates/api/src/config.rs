//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the Kaşif API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `KASIF_DATA_DIR`: Directory holding the JSON slots (default: "data")
//! - `KASIF_STORAGE_VERSION`: Slot key suffix (default: "v3.1"; empty selects the unsuffixed slots)
//! - `KASIF_ADMIN_PASSWORD`: Password for the admin role (admin login disabled when unset)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout, also used for the timetable fetch (default: 30)
//! - `PRAYER_API_BASE_URL`, `PRAYER_CITY`, `PRAYER_COUNTRY`, `PRAYER_METHOD`: prayer timetable source

use eyre::{Result, WrapErr};
use std::{env, path::PathBuf};
use tracing::Level;

use kasif_db::DEFAULT_STORAGE_VERSION;

/// Where the daily prayer timetable is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerApiConfig {
    pub base_url: String,
    pub city: String,
    pub country: String,
    /// Calculation method id understood by the timetable service.
    pub method: u8,
}

impl Default for PrayerApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.aladhan.com/v1".to_string(),
            city: "Istanbul".to_string(),
            country: "Turkey".to_string(),
            method: 13,
        }
    }
}

/// Configuration for the Kaşif API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use kasif_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Directory for the JSON slot files
    pub data_dir: PathBuf,

    /// Suffix appended to every slot key
    pub storage_version: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Admin password; `None` disables the admin role
    pub admin_password: Option<String>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    pub prayer_api: PrayerApiConfig,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - The PRAYER_METHOD value cannot be parsed as a u8
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Storage settings
        let data_dir = env::var("KASIF_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));
        let storage_version = env::var("KASIF_STORAGE_VERSION")
            .unwrap_or_else(|_| DEFAULT_STORAGE_VERSION.to_string());

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Security settings
        let admin_password = env::var("KASIF_ADMIN_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Prayer timetable
        let defaults = PrayerApiConfig::default();
        let prayer_api = PrayerApiConfig {
            base_url: env::var("PRAYER_API_BASE_URL").unwrap_or(defaults.base_url),
            city: env::var("PRAYER_CITY").unwrap_or(defaults.city),
            country: env::var("PRAYER_COUNTRY").unwrap_or(defaults.country),
            method: match env::var("PRAYER_METHOD") {
                Ok(raw) => raw.parse().wrap_err("Invalid PRAYER_METHOD value")?,
                Err(_) => defaults.method,
            },
        };

        Ok(Self {
            host,
            port,
            data_dir,
            storage_version,
            log_level,
            cors_origins,
            admin_password,
            request_timeout,
            prayer_api,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_log_level(raw: &str) -> Level {
    match raw {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
