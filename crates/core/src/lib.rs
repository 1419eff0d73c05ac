// Jobboard Core - Domain Types, Ports & Application Service
// NO database driver dependencies (adapters live in infra crates)

pub mod application;
pub mod domain;
pub mod error;
pub mod impls;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
