// MongoDB JobStore Implementation

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use futures::{Stream, TryStreamExt};
use jobboard_core::domain::{
    CreateJobListingInput, DeleteJobResponse, JobListing, UpdateJobListingInput,
};
use jobboard_core::error::{AppError, Result};
use jobboard_core::port::JobStore;
use mongodb::bson::{doc, Document};
use mongodb::error::ErrorKind;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use tracing::{debug, error, warn};

use crate::document::{
    decode_job, deleted_response, found_listing, id_filter, inserted_job_id, new_job_document,
    parse_job_id, set_document, JOBS_COLLECTION,
};

// Helper to convert mongodb errors to AppError with structured information
pub(crate) fn map_mongo_error(operation: &'static str, err: mongodb::error::Error) -> AppError {
    match err.kind.as_ref() {
        ErrorKind::BsonDeserialization(e) => {
            AppError::DecodeFailed(format!("{operation}: {e}"))
        }
        ErrorKind::Command(cmd) => AppError::QueryFailed {
            operation,
            message: format!("command error [{} {}]: {}", cmd.code, cmd.code_name, cmd.message),
        },
        ErrorKind::ServerSelection { message, .. } => AppError::QueryFailed {
            operation,
            message: format!("no reachable server: {message}"),
        },
        ErrorKind::Authentication { message, .. } => AppError::QueryFailed {
            operation,
            message: format!("authentication failed: {message}"),
        },
        // Network, pool and protocol errors
        _ => AppError::query_failed(operation, &err),
    }
}

/// Drain a `find` cursor, skipping documents that fail to decode
pub(crate) async fn collect_listings<S>(mut documents: S) -> Result<Vec<JobListing>>
where
    S: Stream<Item = mongodb::error::Result<Document>> + Unpin,
{
    let mut jobs = Vec::new();
    let mut skipped = 0usize;
    while let Some(document) = documents
        .try_next()
        .await
        .map_err(|e| map_mongo_error("iterate jobs", e))?
    {
        match decode_job(document) {
            Ok(job) => jobs.push(job.into_listing()),
            Err(e) => {
                skipped += 1;
                warn!(error = %e, "Failed to decode job, skipping");
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, returned = jobs.len(), "Skipped malformed job documents");
    }
    Ok(jobs)
}

/// Job store backed by the `jobs` collection
///
/// Cloning shares the underlying driver connection pool.
#[derive(Clone, Debug)]
pub struct MongoJobStore {
    collection: Collection<Document>,
    timeout: Duration,
}

impl MongoJobStore {
    pub fn new(database: &Database, timeout: Duration) -> Self {
        Self {
            collection: database.collection(JOBS_COLLECTION),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one store call inside the per-operation time bound
    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                warn!(operation, timeout = ?self.timeout, "Store call timed out");
                Err(AppError::Timeout {
                    operation,
                    after: self.timeout,
                })
            }
        }
    }
}

#[async_trait]
impl JobStore for MongoJobStore {
    async fn list_jobs(&self) -> Result<Vec<JobListing>> {
        self.bounded("list jobs", async {
            let cursor = self
                .collection
                .find(doc! {})
                .await
                .map_err(|e| map_mongo_error("list jobs", e))?;

            collect_listings(cursor).await
        })
        .await
    }

    async fn get_job(&self, id: &str) -> Result<JobListing> {
        let job_id = parse_job_id(id)?;

        let document = self
            .bounded("find job", async {
                self.collection
                    .find_one(id_filter(job_id))
                    .await
                    .map_err(|e| map_mongo_error("find job", e))
            })
            .await?;

        found_listing(id, document)
    }

    async fn create_job_listing(&self, input: CreateJobListingInput) -> Result<JobListing> {
        let document = new_job_document(&input);

        let inserted = self
            .bounded("insert job", async {
                self.collection
                    .insert_one(document)
                    .await
                    .map_err(|e| map_mongo_error("insert job", e))
            })
            .await;
        let inserted = match inserted {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "Failed to insert job listing");
                return Err(e);
            }
        };

        let job_id = inserted_job_id(&inserted.inserted_id)?;
        debug!(job_id = %job_id, "Job listing inserted");

        Ok(JobListing::from_input(job_id.to_hex(), input))
    }

    async fn update_job_listing(
        &self,
        id: &str,
        input: UpdateJobListingInput,
    ) -> Result<JobListing> {
        let job_id = parse_job_id(id)?;
        let updates = input.field_updates();

        // MongoDB rejects an empty $set
        if updates.is_empty() {
            debug!(job_id = %job_id, "Update carries no fields, returning current document");
            return self.get_job(id).await;
        }

        let document = self
            .bounded("update job", async {
                self.collection
                    .find_one_and_update(id_filter(job_id), set_document(&updates))
                    .return_document(ReturnDocument::After)
                    .await
                    .map_err(|e| map_mongo_error("update job", e))
            })
            .await?;

        let job = found_listing(id, document)?;
        debug!(job_id = %job.id, fields = updates.len(), "Job listing updated");

        Ok(job)
    }

    async fn delete_job_listing(&self, id: &str) -> Result<DeleteJobResponse> {
        let job_id = parse_job_id(id)?;

        let result = self
            .bounded("delete job", async {
                self.collection
                    .delete_one(id_filter(job_id))
                    .await
                    .map_err(|e| map_mongo_error("delete job", e))
            })
            .await?;

        let response = deleted_response(id, job_id, result.deleted_count)?;
        debug!(job_id = %job_id, "Job listing deleted");

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use mongodb::bson::oid::ObjectId;
    use mongodb::options::ClientOptions;
    use mongodb::Client;

    fn job_document(title: &str) -> Document {
        doc! {
            "_id": ObjectId::new(),
            "title": title,
            "description": "Build things",
            "company": "Acme",
            "url": "http://acme.example/job/1",
        }
    }

    fn connection_reset() -> mongodb::error::Error {
        std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset").into()
    }

    // Client construction is lazy; nothing connects until a store call runs.
    async fn offline_store(timeout: Duration) -> MongoJobStore {
        let options = ClientOptions::parse("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200")
            .await
            .unwrap();
        let client = Client::with_options(options).unwrap();
        MongoJobStore::new(&client.database("jobboard_test"), timeout)
    }

    #[tokio::test]
    async fn test_list_skips_malformed_documents() {
        let mut malformed = job_document("ignored");
        malformed.insert("title", 42);

        let documents: Vec<mongodb::error::Result<Document>> = vec![
            Ok(job_document("Engineer")),
            Ok(malformed),
            Ok(job_document("Designer")),
        ];

        let jobs = collect_listings(stream::iter(documents)).await.unwrap();
        let titles: Vec<_> = jobs.iter().map(|job| job.title.as_str()).collect();
        assert_eq!(titles, vec!["Engineer", "Designer"]);
    }

    #[tokio::test]
    async fn test_list_aborts_on_cursor_failure() {
        let documents = stream::iter(vec![Ok(job_document("Engineer")), Err(connection_reset())]);

        let err = collect_listings(documents).await.unwrap_err();
        assert!(
            matches!(err, AppError::QueryFailed { operation: "iterate jobs", .. }),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            map_mongo_error("find job", connection_reset()),
            AppError::QueryFailed { operation: "find job", .. }
        ));

        let bson_err = mongodb::bson::from_document::<crate::document::JobDocument>(doc! {})
            .unwrap_err();
        assert!(matches!(
            map_mongo_error("find job", bson_err.into()),
            AppError::DecodeFailed(_)
        ));
    }

    #[tokio::test]
    async fn test_invalid_ids_fail_before_any_store_call() {
        let store = offline_store(Duration::from_secs(5)).await;
        assert!(format!("{store:?}").starts_with("MongoJobStore"));

        assert!(store.get_job("abc").await.unwrap_err().is_invalid_id());
        assert!(store
            .update_job_listing("abc", UpdateJobListingInput::new("abc").title("x"))
            .await
            .unwrap_err()
            .is_invalid_id());
        assert!(store
            .delete_job_listing("abc")
            .await
            .unwrap_err()
            .is_invalid_id());
    }

    #[tokio::test]
    async fn test_unreachable_server_surfaces_query_failure() {
        let store = offline_store(Duration::from_secs(30)).await;

        let err = store.list_jobs().await.unwrap_err();
        assert!(
            matches!(err, AppError::QueryFailed { operation: "list jobs", .. }),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn test_bound_aborts_slow_calls() {
        let store = offline_store(Duration::from_millis(20)).await;

        let err = store
            .bounded("find job", async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::Timeout {
                operation: "find job",
                after: Duration::from_millis(20),
            }
        );
    }
}
