//! Configuration management for the book loader

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub delay_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoaderConfig {
    pub csv_path: String,
    /// Stop the whole batch at the first failing row instead of skipping it.
    pub stop_on_row_error: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub retry: RetryConfig,
    pub loader: LoaderConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let database = DatabaseConfig::default();
        let retry = RetryConfig::default();
        let loader = LoaderConfig::default();
        let logging = LoggingConfig::default();

        let config = Config::builder()
            .set_default("database.name", database.name)?
            .set_default("database.user", database.user)?
            .set_default("database.password", database.password)?
            .set_default("database.host", database.host)?
            .set_default("database.port", database.port)?
            .set_default("retry.max_attempts", retry.max_attempts)?
            .set_default("retry.delay_seconds", retry.delay_seconds)?
            .set_default("loader.csv_path", loader.csv_path)?
            .set_default("loader.stop_on_row_error", loader.stop_on_row_error)?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // e.g. BOOKLOADER_LOADER__CSV_PATH=/data/books.csv
            .add_source(
                Environment::with_prefix("BOOKLOADER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // The variables shared with the database container win over everything else
            .set_override_option("database.name", env::var("POSTGRES_DB").ok())?
            .set_override_option("database.user", env::var("POSTGRES_USER").ok())?
            .set_override_option("database.password", env::var("POSTGRES_PASSWORD").ok())?
            .set_override_option("database.host", env::var("DB_HOST").ok())?
            .build()?;

        let app: AppConfig = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::Message(
                "retry.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// Connection options for a single PostgreSQL session
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

impl RetryConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_seconds)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: "tcss460".to_string(),
            user: "tcss460".to_string(),
            password: "ads123".to_string(),
            host: "db".to_string(),
            port: 5432,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay_seconds: 5,
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            csv_path: "/app/books.csv".to_string(),
            stop_on_row_error: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
