// In-memory JobStore Implementation
//
// Native ids are UUID v4, exposed in hyphenated form.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{CreateJobListingInput, DeleteJobResponse, JobListing, UpdateJobListingInput};
use crate::error::{AppError, Result};
use crate::port::JobStore;

fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|e| AppError::InvalidId(format!("{id} ({e})")))
}

/// Job store kept in process memory
#[derive(Debug, Default)]
pub struct MemoryJobStore {
    jobs: RwLock<HashMap<Uuid, JobListing>>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn list_jobs(&self) -> Result<Vec<JobListing>> {
        let jobs = self.jobs.read().await;
        Ok(jobs.values().cloned().collect())
    }

    async fn get_job(&self, id: &str) -> Result<JobListing> {
        let job_id = parse_id(id)?;
        self.jobs
            .read()
            .await
            .get(&job_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn create_job_listing(&self, input: CreateJobListingInput) -> Result<JobListing> {
        let job_id = Uuid::new_v4();
        let job = JobListing::from_input(job_id.to_string(), input);

        self.jobs.write().await.insert(job_id, job.clone());
        debug!(job_id = %job.id, "Job listing created");

        Ok(job)
    }

    async fn update_job_listing(
        &self,
        id: &str,
        input: UpdateJobListingInput,
    ) -> Result<JobListing> {
        let job_id = parse_id(id)?;
        let updates = input.field_updates();

        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&job_id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        updates.apply_to(job);
        debug!(job_id = %job.id, fields = updates.len(), "Job listing updated");

        Ok(job.clone())
    }

    async fn delete_job_listing(&self, id: &str) -> Result<DeleteJobResponse> {
        let job_id = parse_id(id)?;
        if self.jobs.write().await.remove(&job_id).is_none() {
            return Err(AppError::NotFound(id.to_string()));
        }
        debug!(job_id = %job_id, "Job listing deleted");

        Ok(DeleteJobResponse {
            delete_job_id: job_id.to_string(),
        })
    }
}
