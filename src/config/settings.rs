use std::env;
use std::path::Path;
use std::str::FromStr;

use config::{Config, ConfigError, File};
use dotenv::dotenv;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::fixtures::FixtureSettings;

/// Everything the server and the fixture CLI read at startup
#[derive(Deserialize, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub application: ApplicationSettings,
    #[serde(default)]
    pub fixtures: FixtureSettings,
}

#[derive(Deserialize, Debug)]
pub struct DatabaseSettings {
    pub user: String,
    pub password: SecretString,
    pub port: u16,
    pub host: String,
    pub db_name: String,
    /// Full connection string; wins over the individual fields when set
    #[serde(default)]
    pub db_url: Option<SecretString>,
}

impl DatabaseSettings {
    pub fn connection_string(&self) -> SecretString {
        if let Some(db_url) = &self.db_url {
            return db_url.clone();
        }
        let url = format!("{}/{}", self.server_url(), self.db_name);
        SecretString::new(url.into_boxed_str())
    }

    /// Server-level URL, used to create a scratch database in tests
    pub fn connection_string_without_db(&self) -> String {
        self.server_url()
    }

    fn server_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}",
            self.user,
            self.password.expose_secret(),
            self.host,
            self.port
        )
    }
}

#[derive(Deserialize, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    pub log_level: String,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read `configuration/base.yml`, the file for `APP_ENVIRONMENT`, then
/// `POSTGRES__*` / `APP__*` overrides. `DATABASE_URL` replaces the composed
/// connection string.
pub fn get_config() -> Result<Settings, ConfigError> {
    dotenv().ok();

    let base_path = env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Cannot resolve working directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| Environment::Local.as_str().to_string())
        .parse::<Environment>()
        .map_err(ConfigError::Message)?;

    let mut settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base.yml")))
        .add_source(environment.source(&configuration_directory))
        .add_source(prefixed_env("POSTGRES"))
        .add_source(prefixed_env("APP"))
        .build()?
        .try_deserialize::<Settings>()?;

    if let Ok(db_url) = env::var("DATABASE_URL") {
        settings.database.db_url = Some(SecretString::new(db_url.into_boxed_str()));
    }

    settings.fixtures.validate().map_err(ConfigError::Message)?;

    Ok(settings)
}

fn prefixed_env(prefix: &str) -> config::Environment {
    config::Environment::with_prefix(prefix)
        .prefix_separator("__")
        .separator("__")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }

    /// Per-environment overrides; the file is optional
    fn source(&self, configuration_directory: &Path) -> File<config::FileSourceFile, config::FileFormat> {
        File::from(configuration_directory.join(format!("{}.yml", self.as_str()))).required(false)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "Unknown APP_ENVIRONMENT `{}`, expected `local` or `production`",
                other
            )),
        }
    }
}
