// MongoDB Connection Setup

use jobboard_core::error::{AppError, Result};
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, Credential};
use mongodb::{Client, Database};
use tracing::info;

use crate::job_store::MongoJobStore;
use crate::settings::MongoSettings;

/// Connect, verify liveness with a ping and bind a store to `db_name`
///
/// Returns `AppError::Connection` when the server cannot be reached or the
/// ping fails, and `AppError::Timeout` when the whole sequence exceeds the
/// configured bound. Callers decide whether that is fatal.
pub async fn connect(settings: &MongoSettings, db_name: &str) -> Result<MongoJobStore> {
    let timeout = settings.operation_timeout();

    let database = tokio::time::timeout(timeout, open_database(settings, db_name))
        .await
        .map_err(|_| AppError::Timeout {
            operation: "connect to MongoDB",
            after: timeout,
        })??;

    info!(database = %db_name, "Connected to MongoDB");
    Ok(MongoJobStore::new(&database, timeout))
}

/// Load `MONGODB_*` settings from the environment, then `connect`
pub async fn connect_from_env(db_name: &str) -> Result<MongoJobStore> {
    let settings = MongoSettings::from_env()?;
    connect(&settings, db_name).await
}

async fn open_database(settings: &MongoSettings, db_name: &str) -> Result<Database> {
    let mut options = ClientOptions::parse(settings.connection_string())
        .await
        .map_err(|e| AppError::Connection(format!("Invalid connection string: {e}")))?;

    if settings.has_credentials() {
        let mut credential = Credential::default();
        credential.username = Some(settings.username.clone());
        credential.password = Some(settings.password.clone());
        options.credential = Some(credential);
    }
    if options.app_name.is_none() {
        options.app_name = Some(settings.app_name.clone());
    }

    let client = Client::with_options(options)
        .map_err(|e| AppError::Connection(format!("Failed to connect to MongoDB: {e}")))?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| AppError::Connection(format!("Could not ping MongoDB server: {e}")))?;

    Ok(client.database(db_name))
}
