//! Contact form submission entity and its validation rules.

use super::choices::{Budget, CompanySize, ProjectTimeline};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use validator::{Validate, ValidationError};

/// A contact form submission as posted by the site.
///
/// Every field is a raw string exactly as the form controls produce it;
/// enumerated fields are checked against their declared choices during
/// validation rather than at deserialization, so a bad choice surfaces as a
/// per-field error instead of a parse failure.
///
/// Missing JSON fields deserialize as empty strings and fail validation.
///
/// # JSON
///
/// ```json
/// {
///   "firstName": "Jo",
///   "lastName": "Li",
///   "email": "a@b.com",
///   "company": "Ac",
///   "role": "CTO",
///   "companySize": "1-10",
///   "projectTimeline": "immediate",
///   "budget": "<50k",
///   "message": "Need help fast"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 2, message = "Company name is required"))]
    pub company: String,

    #[validate(length(min = 2, message = "Role is required"))]
    pub role: String,

    #[validate(custom(
        function = "validate_company_size",
        message = "Please select company size"
    ))]
    pub company_size: String,

    #[validate(custom(
        function = "validate_project_timeline",
        message = "Please select project timeline"
    ))]
    pub project_timeline: String,

    #[validate(custom(function = "validate_budget", message = "Please select budget range"))]
    pub budget: String,

    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl ContactSubmission {
    /// Returns the raw value of a field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Role => &self.role,
            ContactField::CompanySize => &self.company_size,
            ContactField::ProjectTimeline => &self.project_timeline,
            ContactField::Budget => &self.budget,
            ContactField::Message => &self.message,
        }
    }

    /// Replaces the raw value of a field.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Role => &mut self.role,
            ContactField::CompanySize => &mut self.company_size,
            ContactField::ProjectTimeline => &mut self.project_timeline,
            ContactField::Budget => &mut self.budget,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Identifies one field of a [`ContactSubmission`].
///
/// Serializes to the camelCase wire name used in JSON payloads and error maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Company,
    Role,
    CompanySize,
    ProjectTimeline,
    Budget,
    Message,
}

impl ContactField {
    /// Fields in form order.
    pub const ALL: [Self; 9] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Company,
        Self::Role,
        Self::CompanySize,
        Self::ProjectTimeline,
        Self::Budget,
        Self::Message,
    ];

    /// JSON name of the field.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Company => "company",
            Self::Role => "role",
            Self::CompanySize => "companySize",
            Self::ProjectTimeline => "projectTimeline",
            Self::Budget => "budget",
            Self::Message => "message",
        }
    }

    /// Struct field name, as reported by `validator`.
    pub fn rust_name(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Role => "role",
            Self::CompanySize => "company_size",
            Self::ProjectTimeline => "project_timeline",
            Self::Budget => "budget",
            Self::Message => "message",
        }
    }

    pub fn from_rust_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.rust_name() == name)
    }

    /// Form label shown next to the control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Work email",
            Self::Company => "Company",
            Self::Role => "Role",
            Self::CompanySize => "Company size",
            Self::ProjectTimeline => "Project timeline",
            Self::Budget => "Budget",
            Self::Message => "Message",
        }
    }

    /// True for fields backed by a select control.
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            Self::CompanySize | Self::ProjectTimeline | Self::Budget
        )
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

fn invalid_choice(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_company_size(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<CompanySize>()
        .map(|_| ())
        .map_err(|_| invalid_choice("company_size", "Please select company size"))
}

fn validate_project_timeline(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<ProjectTimeline>()
        .map(|_| ())
        .map_err(|_| invalid_choice("project_timeline", "Please select project timeline"))
}

fn validate_budget(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<Budget>()
        .map(|_| ())
        .map_err(|_| invalid_choice("budget", "Please select budget range"))
}
