use super::catalog::SITE;
use super::SiteError;

/// Raw field values read from the contact form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated message, ready to hand to the visitor's mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub to: &'static str,
    pub subject: String,
    pub body: String,
}

impl ContactForm {
    /// Check the fields in form order and build the outgoing draft.
    /// Surrounding whitespace is ignored.
    pub fn validate(&self) -> Result<MailDraft, SiteError> {
        let name = required(&self.name, "name")?;
        let email = required(&self.email, "email")?;
        if !is_plausible_email(email) {
            return Err(SiteError::InvalidEmail(email.to_string()));
        }
        let message = required(&self.message, "message")?;

        Ok(MailDraft {
            to: SITE.email,
            subject: format!("Project inquiry from {name}"),
            body: format!("{message}\n\nFrom: {name} <{email}>"),
        })
    }
}

impl MailDraft {
    /// `mailto:` URL with subject and body passed through `encode`
    /// (`encodeURIComponent` in the browser).
    pub fn mailto_url(&self, encode: impl Fn(&str) -> String) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            encode(&self.subject),
            encode(&self.body)
        )
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, SiteError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(SiteError::MissingField { field })
    } else {
        Ok(trimmed)
    }
}

/// Shape check only: `local@domain.tld`, no whitespace.
pub fn is_plausible_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.split('.').any(str::is_empty)
}
