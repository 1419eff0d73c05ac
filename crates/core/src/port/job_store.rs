// Job Store Port (Interface)

use crate::domain::{CreateJobListingInput, DeleteJobResponse, JobListing, UpdateJobListingInput};
use crate::error::Result;
use async_trait::async_trait;

/// CRUD interface over the job listing collection
///
/// Implementations are shared between concurrent callers; each call is an
/// independent request/response cycle against the backing store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Every stored job. Order is store-defined.
    async fn list_jobs(&self) -> Result<Vec<JobListing>>;

    /// Find job by ID
    async fn get_job(&self, id: &str) -> Result<JobListing>;

    /// Insert a new job; the store assigns its ID
    async fn create_job_listing(&self, input: CreateJobListingInput) -> Result<JobListing>;

    /// Apply the fields present in `input` and return the updated job
    async fn update_job_listing(
        &self,
        id: &str,
        input: UpdateJobListingInput,
    ) -> Result<JobListing>;

    /// Delete exactly one job
    async fn delete_job_listing(&self, id: &str) -> Result<DeleteJobResponse>;
}
