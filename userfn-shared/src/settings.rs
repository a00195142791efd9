// © https://github.com/LukeMathWalker/zero-to-production

use std::{
    convert::{TryFrom, TryInto},
    path::Path,
    str::FromStr,
    time::Duration,
};

use config::{Config, ConfigError};
use serde::Deserialize;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};

/// Environment variable holding the database user.
pub const DB_USER: &str = "DB_USER";
/// Environment variable holding the database password.
pub const DB_PASSWORD: &str = "DB_PASSWORD";
/// Environment variable holding the data source name.
pub const DSN: &str = "DSN";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    /// Connection string, e.g. `postgres://localhost:5432/users`.
    pub dsn: String,
    /// Replaces the database named in the DSN.
    #[serde(default)]
    pub database_name: Option<String>,
    pub min_connections: u32,
    pub max_connections: u32,
    /// Upper bound for waiting on a pooled connection.
    #[serde(default)]
    pub acquire_timeout_seconds: Option<u64>,
}

impl DatabaseSettings {
    ///
    /// Get [PgConnectOptions](sqlx::postgres::PgConnectOptions) pointing at the maintenance database.
    ///
    pub fn without_db(&self) -> Result<PgConnectOptions, sqlx::Error> {
        Ok(self.base_options()?.database("postgres"))
    }

    ///
    /// Get [PgConnectOptions](sqlx::postgres::PgConnectOptions) for the configured database.
    ///
    pub fn with_db(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let options = self.base_options()?;

        Ok(match &self.database_name {
            Some(database_name) => options.database(database_name),
            None => options,
        })
    }

    fn base_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        Ok(PgConnectOptions::from_str(&self.dsn)?
            .username(&self.username)
            .password(&self.password))
    }
}

///
/// Available settings environments
///
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
    Testing,
}

impl Environment {
    ///
    /// Get the string representation for an enum.
    /// This can be used to load the settings files.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
            Environment::Testing => "testing",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            "testing" => Ok(Self::Testing),
            other => Err(format!("Unknown environment {:?}!", other)),
        }
    }
}

///
/// Errors that prevent the settings from being loaded.
///
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A required environment variable is not set.
    #[error("Missing configuration key {0}")]
    ConfigurationMissing(&'static str),
    #[error("{0}")]
    InvalidEnvironment(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

///
/// Read a required environment variable.
///
pub fn required_env(key: &'static str) -> Result<String, SettingsError> {
    std::env::var(key).map_err(|_| SettingsError::ConfigurationMissing(key))
}

///
/// Get an instance of the settings.
///
/// This uses the current `APP_ENV` to dertermine the settings file to load.
/// The database credentials always come from `DB_USER`, `DB_PASSWORD` and `DSN`.
///
pub fn get_settings() -> Result<Settings, SettingsError> {
    let base_path = std::env::current_dir().expect("Error while getting current directory");

    get_settings_from(&base_path.join("settings"))
}

///
/// Same as [`get_settings`], reading the settings files from `settings_directory`.
///
pub fn get_settings_from(settings_directory: &Path) -> Result<Settings, SettingsError> {
    let environment: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(SettingsError::InvalidEnvironment)?;

    let config = Config::builder()
        .add_source(config::File::from(settings_directory.join("base")).required(true))
        .add_source(
            config::File::from(settings_directory.join(environment.as_str())).required(false),
        )
        .add_source(config::Environment::with_prefix("app").separator("__"))
        .set_override("database.username", required_env(DB_USER)?)?
        .set_override("database.password", required_env(DB_PASSWORD)?)?
        .set_override("database.dsn", required_env(DSN)?)?
        .build()?;

    Ok(config.try_deserialize()?)
}

///
/// Get a [`PgPool`] from the supplied [`DatabaseSettings`].
///
/// Waits for `min_connections` to be established before returning.
///
#[tracing::instrument(name = "Create database pool", skip(settings), fields(user = %settings.username, dsn = %settings.dsn))]
pub async fn get_db_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut options = PgPoolOptions::new()
        .min_connections(settings.min_connections)
        .max_connections(settings.max_connections);

    if let Some(seconds) = settings.acquire_timeout_seconds {
        options = options.connect_timeout(Duration::from_secs(seconds));
    }

    options.connect_with(settings.with_db()?).await
}
