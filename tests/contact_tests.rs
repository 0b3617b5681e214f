// Host-side tests for contact form validation and the mailto hand-off.

use alexdev_site::core::contact::is_plausible_email;
use alexdev_site::core::{ContactForm, SiteError};

fn form(name: &str, email: &str, message: &str) -> ContactForm {
    ContactForm {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn valid_form_builds_draft_to_site_address() {
    let draft = form("  Dana ", "dana@example.com", "Need a landing page.\n")
        .validate()
        .expect("valid form");
    assert_eq!(draft.to, "alex@creative.dev");
    assert_eq!(draft.subject, "Project inquiry from Dana");
    assert_eq!(
        draft.body,
        "Need a landing page.\n\nFrom: Dana <dana@example.com>"
    );
}

#[test]
fn fields_are_checked_in_form_order() {
    assert_eq!(
        ContactForm::default().validate(),
        Err(SiteError::MissingField { field: "name" })
    );
    assert_eq!(
        form("Dana", "   ", "hi").validate(),
        Err(SiteError::MissingField { field: "email" })
    );
    assert_eq!(
        form("Dana", "dana", "").validate(),
        Err(SiteError::InvalidEmail("dana".to_string()))
    );
    assert_eq!(
        form("Dana", "dana@example.com", " \n ").validate(),
        Err(SiteError::MissingField { field: "message" })
    );
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        SiteError::MissingField { field: "email" }.to_string(),
        "Please fill in your email."
    );
}

#[test]
fn email_shape_check() {
    for ok in ["a@b.co", "first.last@sub.example.org", "x+tag@mail.dev"] {
        assert!(is_plausible_email(ok), "{ok}");
    }
    for bad in [
        "",
        "plain",
        "@example.com",
        "a@",
        "a@b",
        "a@b.",
        "a@.com",
        "a@b..com",
        "a@sub..example.org",
        "a@@b.com",
        "a b@c.com",
    ] {
        assert!(!is_plausible_email(bad), "{bad}");
    }
}

#[test]
fn mailto_url_encodes_subject_and_body() {
    let draft = form("Dana", "dana@example.com", "Hi there")
        .validate()
        .expect("valid form");
    let url = draft.mailto_url(|s| s.replace(' ', "%20").replace('\n', "%0A"));
    assert_eq!(
        url,
        "mailto:alex@creative.dev?subject=Project%20inquiry%20from%20Dana\
         &body=Hi%20there%0A%0AFrom:%20Dana%20<dana@example.com>"
    );
}
