// Port Layer - Interfaces for external dependencies

pub mod job_store;

// Re-exports
pub use job_store::JobStore;

#[cfg(test)]
pub use job_store::MockJobStore;
