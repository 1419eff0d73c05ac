// Jobboard Infrastructure - MongoDB Adapter
// Implements: JobStore over the "jobs" collection

mod connection;
mod document;
mod job_store;
mod settings;

pub use connection::{connect, connect_from_env};
pub use document::{JobDocument, JOBS_COLLECTION};
pub use job_store::MongoJobStore;
pub use settings::MongoSettings;

// Note: mongodb::error::Error conversion is handled by map_mongo_error
// due to Rust's orphan rules (cannot implement From<mongodb::error::Error> for AppError here)
