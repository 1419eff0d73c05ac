// Job Board Service - the façade API layers (GraphQL resolvers, CLI) call

use crate::domain::{CreateJobListingInput, DeleteJobResponse, JobListing, UpdateJobListingInput};
use crate::error::{AppError, Result};
use crate::port::JobStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Job Board Service
///
/// Holds an explicitly constructed store handle. Cloning is cheap and clones
/// share the same store.
#[derive(Clone)]
pub struct JobBoardService {
    store: Arc<dyn JobStore>,
}

impl JobBoardService {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }

    /// List every job listing
    pub async fn jobs(&self) -> Result<Vec<JobListing>> {
        let jobs = self.store.list_jobs().await?;
        debug!(count = jobs.len(), "Listed jobs");
        Ok(jobs)
    }

    /// Get a single job listing
    pub async fn job(&self, id: &str) -> Result<JobListing> {
        debug!(job_id = %id, "Fetching job");
        self.store.get_job(id).await
    }

    pub async fn create_job_listing(&self, input: CreateJobListingInput) -> Result<JobListing> {
        let job = self.store.create_job_listing(input).await?;
        info!(job_id = %job.id, company = %job.company, "Job listing created");
        Ok(job)
    }

    /// Apply a partial update
    ///
    /// The input must name the same job as `id`.
    pub async fn update_job_listing(
        &self,
        id: &str,
        input: UpdateJobListingInput,
    ) -> Result<JobListing> {
        if input.id.is_empty() {
            return Err(AppError::InvalidId(
                "update input is missing the job ID".to_string(),
            ));
        }
        if input.id != id {
            return Err(AppError::Validation(format!(
                "update input targets job {} but job {} was requested",
                input.id, id
            )));
        }

        let fields = input.field_updates().len();
        let job = self.store.update_job_listing(id, input).await?;
        info!(job_id = %job.id, fields, "Job listing updated");
        Ok(job)
    }

    pub async fn delete_job_listing(&self, id: &str) -> Result<DeleteJobResponse> {
        let response = self.store.delete_job_listing(id).await?;
        info!(job_id = %response.delete_job_id, "Job listing deleted");
        Ok(response)
    }
}
