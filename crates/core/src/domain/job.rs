// Job Listing Domain Model

use serde::{Deserialize, Serialize};

use super::update::JobFieldUpdates;

/// Job ID in its external string form (store-native ids convert to/from it)
pub type JobId = String;

/// Job listing as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub company: String,
    pub url: String,
}

impl JobListing {
    /// Assemble a listing from a create input and the id the store assigned
    pub fn from_input(id: impl Into<JobId>, input: CreateJobListingInput) -> Self {
        Self {
            id: id.into(),
            title: input.title,
            description: input.description,
            company: input.company,
            url: input.url,
        }
    }
}

/// Input for creating a listing. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJobListingInput {
    pub title: String,
    pub description: String,
    pub company: String,
    pub url: String,
}

impl CreateJobListingInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        company: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            company: company.into(),
            url: url.into(),
        }
    }
}

/// Input for a partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateJobListingInput {
    pub id: JobId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl UpdateJobListingInput {
    pub fn new(id: impl Into<JobId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Field update set holding only the fields present in this input
    pub fn field_updates(&self) -> JobFieldUpdates {
        JobFieldUpdates::from(self)
    }
}

/// Result of a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteJobResponse {
    pub delete_job_id: JobId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_keeps_fields_verbatim() {
        let input = CreateJobListingInput::new(
            "Engineer",
            "Build things",
            "Acme",
            "http://acme.example/job/1",
        );
        let job = JobListing::from_input("abc123", input.clone());

        assert_eq!(job.id, "abc123");
        assert_eq!(job.title, input.title);
        assert_eq!(job.description, input.description);
        assert_eq!(job.company, input.company);
        assert_eq!(job.url, input.url);
    }

    #[test]
    fn test_update_input_deserializes_missing_fields_as_absent() {
        let input: UpdateJobListingInput =
            serde_json::from_value(serde_json::json!({"id": "abc", "title": "Senior Engineer"}))
                .unwrap();

        assert_eq!(input.id, "abc");
        assert_eq!(input.title.as_deref(), Some("Senior Engineer"));
        assert!(input.description.is_none());
        assert!(input.company.is_none());
        assert!(input.url.is_none());
    }

    #[test]
    fn test_update_input_skips_absent_fields_when_serialized() {
        let input = UpdateJobListingInput::new("abc").company("Globex");
        let value = serde_json::to_value(&input).unwrap();

        assert_eq!(value, serde_json::json!({"id": "abc", "company": "Globex"}));
    }
}
