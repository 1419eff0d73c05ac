// Partial Update Model
//
// An update carries a present/absent tag per field. Only present fields are
// written; everything else keeps its stored value.

use std::fmt;

use super::job::{JobListing, UpdateJobListingInput};

/// Mutable fields of a job listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobField {
    Title,
    Description,
    Company,
    Url,
}

impl JobField {
    pub const ALL: [JobField; 4] = [
        JobField::Title,
        JobField::Description,
        JobField::Company,
        JobField::Url,
    ];

    /// Key of this field in the stored document
    pub fn key(&self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::Description => "description",
            JobField::Company => "company",
            JobField::Url => "url",
        }
    }
}

impl fmt::Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Update for a single field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate {
    #[default]
    Unchanged,
    Set(String),
}

impl FieldUpdate {
    pub fn value(&self) -> Option<&str> {
        match self {
            FieldUpdate::Unchanged => None,
            FieldUpdate::Set(value) => Some(value.as_str()),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, FieldUpdate::Set(_))
    }
}

impl From<Option<String>> for FieldUpdate {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldUpdate::Unchanged, FieldUpdate::Set)
    }
}

/// Set of field updates for one job listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFieldUpdates {
    title: FieldUpdate,
    description: FieldUpdate,
    company: FieldUpdate,
    url: FieldUpdate,
}

impl JobFieldUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: JobField, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = FieldUpdate::Set(value.into());
        self
    }

    pub fn get(&self, field: JobField) -> &FieldUpdate {
        match field {
            JobField::Title => &self.title,
            JobField::Description => &self.description,
            JobField::Company => &self.company,
            JobField::Url => &self.url,
        }
    }

    fn slot_mut(&mut self, field: JobField) -> &mut FieldUpdate {
        match field {
            JobField::Title => &mut self.title,
            JobField::Description => &mut self.description,
            JobField::Company => &mut self.company,
            JobField::Url => &mut self.url,
        }
    }

    /// Present fields with their new values, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (JobField, &str)> + '_ {
        JobField::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).value().map(|value| (field, value)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write every present field into `job`, leaving the others untouched
    pub fn apply_to(&self, job: &mut JobListing) {
        for (field, value) in self.iter() {
            let target = match field {
                JobField::Title => &mut job.title,
                JobField::Description => &mut job.description,
                JobField::Company => &mut job.company,
                JobField::Url => &mut job.url,
            };
            *target = value.to_string();
        }
    }
}

impl From<&UpdateJobListingInput> for JobFieldUpdates {
    fn from(input: &UpdateJobListingInput) -> Self {
        Self {
            title: input.title.clone().into(),
            description: input.description.clone().into(),
            company: input.company.clone().into(),
            url: input.url.clone().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engineer() -> JobListing {
        JobListing {
            id: "job-1".to_string(),
            title: "Engineer".to_string(),
            description: "Build things".to_string(),
            company: "Acme".to_string(),
            url: "http://acme.example/job/1".to_string(),
        }
    }

    #[test]
    fn test_empty_input_has_no_updates() {
        let updates = UpdateJobListingInput::new("job-1").field_updates();
        assert!(updates.is_empty());
        assert_eq!(updates.iter().count(), 0);
    }

    #[test]
    fn test_only_present_fields_are_collected() {
        let input = UpdateJobListingInput::new("job-1")
            .title("Senior Engineer")
            .url("http://acme.example/job/2");
        let updates = input.field_updates();

        let collected: Vec<_> = updates.iter().collect();
        assert_eq!(
            collected,
            vec![
                (JobField::Title, "Senior Engineer"),
                (JobField::Url, "http://acme.example/job/2"),
            ]
        );
        assert!(!updates.get(JobField::Company).is_set());
    }

    #[test]
    fn test_apply_leaves_absent_fields_untouched() {
        let mut job = engineer();
        JobFieldUpdates::new()
            .set(JobField::Title, "Senior Engineer")
            .apply_to(&mut job);

        assert_eq!(job.title, "Senior Engineer");
        assert_eq!(job.description, "Build things");
        assert_eq!(job.company, "Acme");
        assert_eq!(job.url, "http://acme.example/job/1");
        assert_eq!(job.id, "job-1");
    }

    #[test]
    fn test_empty_string_is_a_present_value() {
        let updates = UpdateJobListingInput::new("job-1").description("").field_updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates.get(JobField::Description).value(), Some(""));
    }

    #[test]
    fn test_field_keys_match_document_schema() {
        let keys: Vec<_> = JobField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["title", "description", "company", "url"]);
    }
}
