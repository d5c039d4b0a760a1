mod common;

use mockito::Matcher;
use serde_json::json;
use snappy_site::client::{
    ContactForm, FormState, GENERIC_FAILURE, HttpTransport, SubmissionTransport, SubmitError,
    TransportError,
};
use snappy_site::domain::entities::{ContactField, ContactSubmission};
use snappy_site::routes::RouterOptions;
use std::time::Duration;

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set(ContactField::FirstName, "Jo");
    form.set(ContactField::LastName, "Li");
    form.set(ContactField::Email, "a@b.com");
    form.set(ContactField::Company, "Ac");
    form.set(ContactField::Role, "CTO");
    form.set(ContactField::CompanySize, "1-10");
    form.set(ContactField::ProjectTimeline, "immediate");
    form.set(ContactField::Budget, "<50k");
    form.set(ContactField::Message, "Need help fast");
    form
}

#[tokio::test]
async fn test_form_posts_camel_case_payload_once() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/contact")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "firstName": "Jo",
            "lastName": "Li",
            "email": "a@b.com",
            "company": "Ac",
            "role": "CTO",
            "companySize": "1-10",
            "projectTimeline": "immediate",
            "budget": "<50k",
            "message": "Need help fast"
        })))
        .with_status(200)
        .with_body(r#"{"success":true,"message":"Thanks!"}"#)
        .expect(1)
        .create_async()
        .await;

    let transport = HttpTransport::new(&server.url(), Duration::from_secs(5)).unwrap();
    let mut form = filled_form();

    form.submit(&transport).await.unwrap();

    assert_eq!(form.acknowledgement(), Some("Thanks!"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_failure_returns_form_to_editing() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/contact")
        .with_status(500)
        .with_body(r#"{"success":false,"message":"Something went wrong. Please try again."}"#)
        .create_async()
        .await;

    let transport = HttpTransport::new(&server.url(), Duration::from_secs(5)).unwrap();
    let mut form = filled_form();

    let err = form.submit(&transport).await.unwrap_err();

    assert!(matches!(
        err,
        SubmitError::Failed(TransportError::Rejected { status: 500, .. })
    ));
    assert_eq!(form.state(), &FormState::Editing);
    assert_eq!(form.form_error(), Some(GENERIC_FAILURE));
    assert_eq!(form.value(ContactField::Email), "a@b.com");
}

#[tokio::test]
async fn test_success_false_body_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/contact")
        .with_status(200)
        .with_body(r#"{"success":false,"message":"nope"}"#)
        .create_async()
        .await;

    let transport = HttpTransport::new(&server.url(), Duration::from_secs(5)).unwrap();

    let err = transport
        .submit(&ContactSubmission::default())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Rejected { status: 200, ref message } if message == "nope"));
}

#[tokio::test]
async fn test_non_json_body_is_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/contact")
        .with_status(200)
        .with_body("<html>proxy page</html>")
        .create_async()
        .await;

    let transport = HttpTransport::new(&server.url(), Duration::from_secs(5)).unwrap();

    let err = transport
        .submit(&ContactSubmission::default())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_bad_request_field_errors_are_parsed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/contact")
        .with_status(400)
        .with_body(
            r#"{"success":false,"message":"Validation failed","errors":{"email":"Invalid email address"}}"#,
        )
        .create_async()
        .await;

    let transport = HttpTransport::new(&server.url(), Duration::from_secs(5)).unwrap();

    let err = transport
        .submit(&ContactSubmission::default())
        .await
        .unwrap_err();

    match err {
        TransportError::InvalidFields(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(ContactField::Email), Some("Invalid email address"));
        }
        other => panic!("expected InvalidFields, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_validation_errors_reach_the_form_fields() {
    let site = common::create_site();
    let config = common::test_config(site.path(), None);
    let base_url = common::spawn_server(&config, RouterOptions::default()).await;
    let transport = HttpTransport::new(&base_url, Duration::from_secs(5)).unwrap();

    // bypass local validation to exercise the server-side rules
    let mut submission = filled_form().values().clone();
    submission.budget = "1M+".to_string();
    submission.role = "X".to_string();

    let err = transport.submit(&submission).await.unwrap_err();

    match err {
        TransportError::InvalidFields(errors) => {
            assert_eq!(errors.get(ContactField::Budget), Some("Please select budget range"));
            assert_eq!(errors.get(ContactField::Role), Some("Role is required"));
            assert!(!errors.contains(ContactField::Email));
        }
        other => panic!("expected InvalidFields, got {other:?}"),
    }

    // a valid form goes through the real endpoint
    let mut form = filled_form();
    form.submit(&transport).await.unwrap();
    assert_eq!(
        form.acknowledgement(),
        Some("Thank you for your message! We will get back to you soon.")
    );
}
