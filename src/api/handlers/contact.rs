//! Handler for the contact form relay endpoint.

use axum::{Json, body::Bytes, extract::State};

use crate::api::dto::contact::ContactResponse;
use crate::application::services::ACKNOWLEDGEMENT;
use crate::domain::entities::ContactSubmission;
use crate::domain::validate_submission;
use crate::error::AppError;
use crate::state::AppState;

/// Message returned when the request body cannot be parsed.
pub const MALFORMED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Receives a contact form submission and relays it by email.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
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
///
/// # Response
///
/// ```json
/// { "success": true, "message": "Thank you for your message! We will get back to you soon." }
/// ```
///
/// The acknowledgement does not depend on email delivery: a disabled relay or
/// a provider failure still yields `200 OK`.
///
/// # Errors
///
/// - **500**: body is not JSON of the submission shape (`{"success": false}`)
/// - **400**: a field fails validation (`{"success": false, "errors": {...}}`)
pub async fn contact_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ContactResponse>, AppError> {
    let submission: ContactSubmission = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected malformed contact submission");
        AppError::malformed_request(MALFORMED_MESSAGE)
    })?;

    tracing::info!(
        first_name = %submission.first_name,
        last_name = %submission.last_name,
        email = %submission.email,
        company = %submission.company,
        role = %submission.role,
        company_size = %submission.company_size,
        project_timeline = %submission.project_timeline,
        budget = %submission.budget,
        message = %submission.message,
        "Contact form submission received"
    );
    metrics::counter!("contact_submissions_total").increment(1);

    if let Err(errors) = validate_submission(&submission) {
        tracing::info!(
            fields = ?errors.fields().map(|f| f.wire_name()).collect::<Vec<_>>(),
            "Contact submission failed validation"
        );
        return Err(AppError::validation(errors));
    }

    state.contact_service.relay(&submission).await;

    Ok(Json(ContactResponse::success(ACKNOWLEDGEMENT)))
}
