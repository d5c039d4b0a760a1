//! Rendering of the contact notification email.

use askama::Template;
use chrono::{DateTime, Utc};

use crate::domain::entities::{
    Budget, CompanySize, ContactSubmission, EmailMessage, ProjectTimeline,
};
use crate::domain::gateways::DeliveryError;

/// Renders `templates/contact_email.html`.
///
/// Every field is escaped by Askama; the message additionally has its line
/// breaks turned into `<br/>` by the `linebreaksbr` filter.
#[derive(Template)]
#[template(path = "contact_email.html")]
struct ContactEmailTemplate<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    company: &'a str,
    role: &'a str,
    company_size: &'a str,
    project_timeline: &'a str,
    budget: &'a str,
    message: String,
    received_at: String,
}

/// Folds `\r\n` and lone `\r` into `\n`.
fn normalize_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Sender and recipient of notification emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddresses {
    pub from: String,
    pub to: String,
}

pub fn subject_for(submission: &ContactSubmission) -> String {
    format!(
        "New Contact Form Submission from {}",
        submission.full_name()
    )
}

/// Builds the notification email for a submission.
///
/// Enumerated fields are shown with their human labels; an unrecognised value
/// is shown verbatim.
///
/// # Errors
///
/// Returns [`DeliveryError::Render`] if the template fails to render.
pub fn build_notification(
    submission: &ContactSubmission,
    addresses: &EmailAddresses,
    received_at: DateTime<Utc>,
) -> Result<EmailMessage, DeliveryError> {
    let company_size = submission
        .company_size
        .parse::<CompanySize>()
        .map(|c| c.label())
        .unwrap_or(submission.company_size.as_str());
    let project_timeline = submission
        .project_timeline
        .parse::<ProjectTimeline>()
        .map(|t| t.label())
        .unwrap_or(submission.project_timeline.as_str());
    let budget = submission
        .budget
        .parse::<Budget>()
        .map(|b| b.label())
        .unwrap_or(submission.budget.as_str());

    let template = ContactEmailTemplate {
        first_name: &submission.first_name,
        last_name: &submission.last_name,
        email: &submission.email,
        company: &submission.company,
        role: &submission.role,
        company_size,
        project_timeline,
        budget,
        message: normalize_line_breaks(&submission.message),
        received_at: received_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    };

    let html = template
        .render()
        .map_err(|e| DeliveryError::Render(e.to_string()))?;

    Ok(EmailMessage {
        from: addresses.from.clone(),
        to: vec![addresses.to.clone()],
        subject: subject_for(submission),
        html,
        reply_to: Some(submission.email.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            first_name: "Jo".to_string(),
            last_name: "Li".to_string(),
            email: "a@b.com".to_string(),
            company: "Acme & Sons".to_string(),
            role: "CTO".to_string(),
            company_size: "51-200".to_string(),
            project_timeline: "1-3months".to_string(),
            budget: "100k-250k".to_string(),
            message: "Line one\nLine <two>".to_string(),
        }
    }

    fn addresses() -> EmailAddresses {
        EmailAddresses {
            from: "Site <noreply@example.com>".to_string(),
            to: "team@example.com".to_string(),
        }
    }

    fn received_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn test_subject_includes_full_name() {
        assert_eq!(
            subject_for(&submission()),
            "New Contact Form Submission from Jo Li"
        );
    }

    #[test]
    fn test_build_notification_envelope() {
        let email = build_notification(&submission(), &addresses(), received_at()).unwrap();

        assert_eq!(email.from, "Site <noreply@example.com>");
        assert_eq!(email.to, vec!["team@example.com".to_string()]);
        assert_eq!(email.reply_to.as_deref(), Some("a@b.com"));
        assert_eq!(email.subject, "New Contact Form Submission from Jo Li");
    }

    #[test]
    fn test_html_lists_fields_with_labels() {
        let email = build_notification(&submission(), &addresses(), received_at()).unwrap();

        assert!(email.html.contains("Jo Li"));
        assert!(email.html.contains("a@b.com"));
        assert!(email.html.contains("CTO"));
        assert!(email.html.contains("51-200 employees"));
        assert!(email.html.contains("1-3 months"));
        assert!(email.html.contains("$100k - $250k"));
        assert!(email.html.contains("2026-03-14 09:26:53 UTC"));
    }

    #[test]
    fn test_html_escapes_input_and_converts_line_breaks() {
        let mut s = submission();
        s.first_name = "<script>alert(1)</script>".to_string();

        let email = build_notification(&s, &addresses(), received_at()).unwrap();

        assert!(!email.html.contains("<script>"));
        assert!(!email.html.contains("<two>"));
        assert!(email.html.contains("Acme &amp; Sons") || email.html.contains("Acme &#38; Sons"));
        assert!(email.html.contains("Line one<br/>Line "));
        assert!(email.html.contains("&lt;two&gt;") || email.html.contains("&#60;two&#62;"));
    }

    #[test]
    fn test_message_script_is_escaped() {
        let mut s = submission();
        s.message = "<script>\nalert(1)</script>".to_string();

        let email = build_notification(&s, &addresses(), received_at()).unwrap();

        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("<br/>alert(1)"));
    }

    #[test]
    fn test_normalize_line_breaks() {
        assert_eq!(normalize_line_breaks("one\ntwo"), "one\ntwo");
        assert_eq!(normalize_line_breaks("one\r\ntwo\rthree"), "one\ntwo\nthree");
        assert_eq!(normalize_line_breaks("a\r\n\r\nb"), "a\n\nb");
    }

    #[test]
    fn test_carriage_returns_become_breaks() {
        let mut s = submission();
        s.message = "one\r\ntwo\rthree".to_string();

        let email = build_notification(&s, &addresses(), received_at()).unwrap();

        assert!(email.html.contains("one<br/>two<br/>three"));
    }

    #[test]
    fn test_unknown_choice_is_shown_verbatim() {
        let mut s = submission();
        s.budget = "lots".to_string();

        let email = build_notification(&s, &addresses(), received_at()).unwrap();

        assert!(email.html.contains("lots"));
    }
}
