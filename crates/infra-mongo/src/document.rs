// Stored representation of a job listing and BSON mapping helpers

use jobboard_core::domain::{
    CreateJobListingInput, DeleteJobResponse, JobFieldUpdates, JobListing,
};
use jobboard_core::error::{AppError, Result};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use serde::{Deserialize, Serialize};

pub const JOBS_COLLECTION: &str = "jobs";

/// Job document in the `jobs` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub company: String,
    pub url: String,
}

impl JobDocument {
    pub fn into_listing(self) -> JobListing {
        JobListing {
            id: self.id.to_hex(),
            title: self.title,
            description: self.description,
            company: self.company,
            url: self.url,
        }
    }
}

/// Parse an external id into an ObjectId
pub(crate) fn parse_job_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|e| AppError::InvalidId(format!("{id} ({e})")))
}

pub(crate) fn id_filter(id: ObjectId) -> Document {
    doc! { "_id": id }
}

pub(crate) fn decode_job(document: Document) -> Result<JobDocument> {
    mongodb::bson::from_document(document)
        .map_err(|e| AppError::DecodeFailed(format!("failed to decode job: {e}")))
}

/// Listing for a single-document read; `None` means no document matched `id`
pub(crate) fn found_listing(id: &str, document: Option<Document>) -> Result<JobListing> {
    let document = document.ok_or_else(|| AppError::NotFound(id.to_string()))?;
    Ok(decode_job(document)?.into_listing())
}

pub(crate) fn inserted_job_id(inserted_id: &Bson) -> Result<ObjectId> {
    inserted_id.as_object_id().ok_or_else(|| {
        AppError::DecodeFailed(format!(
            "store assigned a non-ObjectId identifier: {inserted_id}"
        ))
    })
}

/// Response for a delete; the echoed id is the canonical hex form
pub(crate) fn deleted_response(
    id: &str,
    job_id: ObjectId,
    deleted_count: u64,
) -> Result<DeleteJobResponse> {
    if deleted_count == 0 {
        return Err(AppError::NotFound(id.to_string()));
    }
    Ok(DeleteJobResponse {
        delete_job_id: job_id.to_hex(),
    })
}

/// New document for an insert; `_id` is left to the server
pub(crate) fn new_job_document(input: &CreateJobListingInput) -> Document {
    doc! {
        "title": input.title.as_str(),
        "description": input.description.as_str(),
        "company": input.company.as_str(),
        "url": input.url.as_str(),
    }
}

/// `$set` update holding only the present fields
pub(crate) fn set_document(updates: &JobFieldUpdates) -> Document {
    let mut fields = Document::new();
    for (field, value) in updates.iter() {
        fields.insert(field.key(), value);
    }
    doc! { "$set": fields }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::domain::{JobField, UpdateJobListingInput};

    #[test]
    fn test_decode_and_convert() {
        let id = ObjectId::new();
        let document = doc! {
            "_id": id,
            "title": "Engineer",
            "description": "Build things",
            "company": "Acme",
            "url": "http://acme.example/job/1",
        };

        let job = decode_job(document).unwrap().into_listing();
        assert_eq!(job.id, id.to_hex());
        assert_eq!(job.title, "Engineer");
        assert_eq!(job.url, "http://acme.example/job/1");
    }

    #[test]
    fn test_decode_rejects_malformed_document() {
        let document = doc! {
            "_id": ObjectId::new(),
            "title": 42,
            "description": "Build things",
            "company": "Acme",
            "url": "http://acme.example/job/1",
        };

        assert!(matches!(decode_job(document), Err(AppError::DecodeFailed(_))));
    }

    #[test]
    fn test_id_round_trip_is_lossless() {
        let id = ObjectId::new();
        assert_eq!(parse_job_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_malformed_ids() {
        for id in ["", "abc", "zzzzzzzzzzzzzzzzzzzzzzzz", "65f1c0ffee65f1c0ffee65f1c0"] {
            let err = parse_job_id(id).unwrap_err();
            assert!(err.is_invalid_id(), "{id:?} should be rejected");
        }
    }

    #[test]
    fn test_found_listing() {
        let id = ObjectId::new();
        let hex = id.to_hex();

        assert_eq!(
            found_listing(&hex, None).unwrap_err(),
            AppError::NotFound(hex.clone())
        );

        let malformed = doc! { "_id": id, "title": "Engineer" };
        assert!(matches!(
            found_listing(&hex, Some(malformed)),
            Err(AppError::DecodeFailed(_))
        ));

        let document = doc! {
            "_id": id,
            "title": "Engineer",
            "description": "Build things",
            "company": "Acme",
            "url": "http://acme.example/job/1",
        };
        let job = found_listing(&hex, Some(document)).unwrap();
        assert_eq!(job.id, hex);
        assert_eq!(job.company, "Acme");
    }

    #[test]
    fn test_inserted_id_must_be_an_object_id() {
        let id = ObjectId::new();
        assert_eq!(inserted_job_id(&Bson::ObjectId(id)).unwrap(), id);

        for other in [Bson::String(id.to_hex()), Bson::Int32(7), Bson::Null] {
            assert!(matches!(
                inserted_job_id(&other),
                Err(AppError::DecodeFailed(_))
            ));
        }
    }

    #[test]
    fn test_deleted_response_echoes_canonical_id() {
        let id = ObjectId::new();
        let upper = id.to_hex().to_uppercase();
        let job_id = parse_job_id(&upper).unwrap();

        let response = deleted_response(&upper, job_id, 1).unwrap();
        assert_eq!(response.delete_job_id, id.to_hex());

        assert_eq!(
            deleted_response(&upper, job_id, 0).unwrap_err(),
            AppError::NotFound(upper)
        );
    }

    #[test]
    fn test_new_document_has_no_id() {
        let document = new_job_document(&CreateJobListingInput::new(
            "Engineer",
            "Build things",
            "Acme",
            "http://acme.example/job/1",
        ));

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("company").unwrap(), "Acme");
        assert_eq!(document.len(), 4);
    }

    #[test]
    fn test_set_document_contains_only_present_fields() {
        let updates = UpdateJobListingInput::new("x")
            .title("Senior Engineer")
            .company("Globex")
            .field_updates();

        assert_eq!(
            set_document(&updates),
            doc! { "$set": { "title": "Senior Engineer", "company": "Globex" } }
        );
    }

    #[test]
    fn test_set_document_from_explicit_updates() {
        let updates = JobFieldUpdates::new().set(JobField::Url, "http://acme.example/job/2");
        let update = set_document(&updates);

        let fields = update.get_document("$set").unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get_str("url").unwrap(), "http://acme.example/job/2");
    }
}
