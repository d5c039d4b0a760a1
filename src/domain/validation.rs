//! Per-field validation errors keyed by contact form field.

use crate::domain::entities::{ContactField, ContactSubmission};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

/// First failing rule for each invalid field, in form order.
///
/// Serializes as `{"<wireName>": "<message>"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ContactField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ContactField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: ContactField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FieldErrors::new();

        for (name, errs) in errors.field_errors() {
            let Some(field) = ContactField::from_rust_name(&name.to_string()) else {
                continue;
            };
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field.label()));
            out.insert(field, message);
        }

        out
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        Self::from(&errors)
    }
}

/// Validates a submission, collecting one message per failing field.
pub fn validate_submission(submission: &ContactSubmission) -> Result<(), FieldErrors> {
    submission.validate().map_err(FieldErrors::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_submission_reports_every_field() {
        let errors = validate_submission(&ContactSubmission::default()).unwrap_err();

        assert_eq!(errors.len(), ContactField::ALL.len());
        assert_eq!(
            errors.get(ContactField::Email),
            Some("Invalid email address")
        );
        assert_eq!(
            errors.get(ContactField::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_fields_iterate_in_form_order() {
        let errors = validate_submission(&ContactSubmission::default()).unwrap_err();
        let fields: Vec<ContactField> = errors.fields().collect();

        assert_eq!(fields, ContactField::ALL.to_vec());
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let mut errors = FieldErrors::new();
        errors.insert(ContactField::FirstName, "too short");
        errors.insert(ContactField::CompanySize, "pick one");

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({ "firstName": "too short", "companySize": "pick one" })
        );
    }

    #[test]
    fn test_remove_and_clear() {
        let mut errors = FieldErrors::new();
        errors.insert(ContactField::Role, "bad");
        errors.insert(ContactField::Budget, "bad");

        assert_eq!(errors.remove(ContactField::Role).as_deref(), Some("bad"));
        assert!(!errors.contains(ContactField::Role));

        errors.clear();
        assert!(errors.is_empty());
    }
}
