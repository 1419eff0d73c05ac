// Domain Layer - Transfer objects and the partial update model

pub mod job;
pub mod update;

// Re-exports
pub use job::{CreateJobListingInput, DeleteJobResponse, JobId, JobListing, UpdateJobListingInput};
pub use update::{FieldUpdate, JobField, JobFieldUpdates};
