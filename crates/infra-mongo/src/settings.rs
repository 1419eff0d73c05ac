// MongoDB Connection Settings

use std::fmt;
use std::time::Duration;

use config::{Config, Environment};
use jobboard_core::error::{AppError, Result};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "MONGODB";
pub const DEFAULT_HOST: &str = "cluster0.dj3nz.mongodb.net";
pub const DEFAULT_APP_NAME: &str = "Cluster0";
/// Bound applied to every single store call
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Settings read from `MONGODB_*` environment variables
///
/// `MONGODB_USERNAME` and `MONGODB_PASSWORD` are required. `MONGODB_URI`
/// replaces the generated connection string entirely (credentials are still
/// applied on top of it).
#[derive(Clone, Deserialize)]
pub struct MongoSettings {
    pub username: String,
    pub password: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl MongoSettings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    fn load(source: Environment) -> Result<Self> {
        Config::builder()
            .add_source(source)
            .build()
            .and_then(|conf| conf.try_deserialize())
            .map_err(|e| AppError::Config(format!("MongoDB settings: {e}")))
    }

    /// Settings for a deployment that needs no authentication (local or test servers)
    pub fn for_uri(uri: impl Into<String>) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            host: default_host(),
            app_name: default_app_name(),
            uri: Some(uri.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty()
    }

    /// Connection string without credentials
    pub fn connection_string(&self) -> String {
        match &self.uri {
            Some(uri) => uri.clone(),
            None => format!(
                "mongodb+srv://{}/?retryWrites=true&w=majority&appName={}",
                self.host, self.app_name
            ),
        }
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl fmt::Debug for MongoSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MongoSettings")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("app_name", &self.app_name)
            .field("uri", &self.uri)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
