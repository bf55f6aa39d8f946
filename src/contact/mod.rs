//! Contact form with a simulated submission
//!
//! [`ContactSubmitter`] is the two-state machine (idle, submitting). The
//! delay between the two transitions is driven by a [`SubmissionTimer`],
//! which the caller owns and may cancel. Nothing is sent anywhere; the
//! submitted text is dropped once the acknowledgment is produced.

pub mod timer;

pub use timer::SubmissionTimer;

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::config::ContactSettings;
use crate::{FolioError, Result};

/// Fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Имя",
            ContactField::Email => "Email",
            ContactField::Message => "Сообщение",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactField::Name => f.write_str("name"),
            ContactField::Email => f.write_str("email"),
            ContactField::Message => f.write_str("message"),
        }
    }
}

/// Text of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// First empty field; presence is the only check
    pub fn missing_field(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|field| self.value(*field).is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

/// Phase of the submission state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
}

/// User-visible confirmation of a finished submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgment {
    pub message: String,
    pub received_at: DateTime<Local>,
}

/// Contact form plus its submission state
#[derive(Debug, Clone, Default)]
pub struct ContactSubmitter {
    form: ContactForm,
    phase: SubmissionPhase,
    settings: ContactSettings,
}

impl ContactSubmitter {
    pub fn new(settings: ContactSettings) -> Self {
        Self {
            form: ContactForm::default(),
            phase: SubmissionPhase::Idle,
            settings,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn settings(&self) -> &ContactSettings {
        &self.settings
    }

    /// Replace one field. Edits are ignored while a submission is pending.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        let value = value.into();
        match field {
            ContactField::Name => self.form.name = value,
            ContactField::Email => self.form.email = value,
            ContactField::Message => self.form.message = value,
        }
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.form.is_complete()
    }

    /// idle -> submitting. Leaves the state untouched on error.
    pub fn begin(&mut self) -> Result<()> {
        if self.is_submitting() {
            return Err(FolioError::AlreadySubmitting);
        }
        if let Some(field) = self.form.missing_field() {
            debug!(%field, "Contact submission refused");
            return Err(FolioError::MissingField(field));
        }

        debug!(
            name_len = self.form.name.chars().count(),
            email_len = self.form.email.chars().count(),
            message_len = self.form.message.chars().count(),
            "Contact submission started"
        );
        self.phase = SubmissionPhase::Submitting;
        Ok(())
    }

    /// submitting -> idle. Clears the form and returns the acknowledgment;
    /// `None` when nothing was pending.
    pub fn complete(&mut self) -> Option<Acknowledgment> {
        if !self.is_submitting() {
            return None;
        }
        self.phase = SubmissionPhase::Idle;
        self.form.clear();

        info!("Contact submission acknowledged");
        Some(Acknowledgment {
            message: self.settings.acknowledgment.clone(),
            received_at: Local::now(),
        })
    }

    /// Abandon a pending submission. The form keeps its text.
    pub fn cancel(&mut self) -> bool {
        if !self.is_submitting() {
            return false;
        }
        debug!("Contact submission cancelled");
        self.phase = SubmissionPhase::Idle;
        true
    }

    /// Run a whole submission inline: begin, wait the delay, complete
    pub async fn submit(&mut self) -> Result<Acknowledgment> {
        self.begin()?;
        tokio::time::sleep(self.settings.delay()).await;
        self.complete().ok_or_else(|| {
            FolioError::Generic(anyhow::anyhow!("Contact submission ended without acknowledgment"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactSubmitter {
        let mut submitter = ContactSubmitter::new(ContactSettings::default());
        submitter.set_field(ContactField::Name, "Иван");
        submitter.set_field(ContactField::Email, "ivan@example.org");
        submitter.set_field(ContactField::Message, "Здравствуйте!");
        submitter
    }

    #[test]
    fn test_missing_field_blocks_transition() {
        let mut submitter = filled();
        submitter.set_field(ContactField::Email, "");

        assert!(!submitter.can_submit());
        let err = submitter.begin().unwrap_err();
        assert!(matches!(err, FolioError::MissingField(ContactField::Email)));
        assert_eq!(submitter.phase(), SubmissionPhase::Idle);
        assert_eq!(submitter.form().name, "Иван");
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut submitter = filled();
        submitter.set_field(ContactField::Name, " ");

        assert!(submitter.can_submit());
        submitter.begin().unwrap();
        assert_eq!(submitter.phase(), SubmissionPhase::Submitting);
    }

    #[test]
    fn test_email_format_is_not_checked() {
        let mut submitter = filled();
        submitter.set_field(ContactField::Email, "not an address");
        assert!(submitter.begin().is_ok());
    }

    #[test]
    fn test_no_reentrant_submission() {
        let mut submitter = filled();
        submitter.begin().unwrap();
        assert!(!submitter.can_submit());
        assert!(matches!(submitter.begin(), Err(FolioError::AlreadySubmitting)));
    }

    #[test]
    fn test_complete_clears_form_once() {
        let mut submitter = filled();
        submitter.begin().unwrap();

        let ack = submitter.complete().unwrap();
        assert_eq!(ack.message, ContactSettings::default().acknowledgment);
        assert_eq!(submitter.form(), &ContactForm::default());
        assert_eq!(submitter.phase(), SubmissionPhase::Idle);

        assert!(submitter.complete().is_none());
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut submitter = filled();
        submitter.begin().unwrap();
        submitter.set_field(ContactField::Name, "Пётр");
        assert_eq!(submitter.form().name, "Иван");
    }

    #[test]
    fn test_cancel_keeps_text() {
        let mut submitter = filled();
        submitter.begin().unwrap();
        assert!(submitter.cancel());
        assert_eq!(submitter.phase(), SubmissionPhase::Idle);
        assert_eq!(submitter.form().message, "Здравствуйте!");
        assert!(submitter.complete().is_none());
        assert!(!submitter.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_delay() {
        let mut submitter = filled();
        let started = tokio::time::Instant::now();

        let ack = submitter.submit().await.unwrap();

        assert!(started.elapsed() >= submitter.settings().delay());
        assert!(!ack.message.is_empty());
        assert!(submitter.form().name.is_empty());
    }
}
