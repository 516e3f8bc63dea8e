//! Contact form submission.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  SubmissionStatus                                                │
//! │  ├── Idle: fields editable, nothing sent yet                     │
//! │  ├── Submitting: one delivery in flight, fields locked           │
//! │  ├── Succeeded: delivered, fields cleared                        │
//! │  └── Failed: delivery failed, fields kept for a retry            │
//! │                                                                  │
//! │  submit()   ──► PendingSubmission (ticket + message)             │
//! │  deliver()  ──► Completion (runs the ContactSender)              │
//! │  complete() ──► Notification for the toast surface               │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The split between `submit` and `complete` keeps the controller free of
//! any runtime: the caller owns the await point, and the state transition
//! back out of `Submitting` only happens in `complete`.

mod emailjs;
mod sender;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::{FolioError, FolioResult};
use crate::notify::Notification;

pub use emailjs::{EmailJsSender, DEFAULT_EMAILJS_ENDPOINT};
pub use sender::{
    build_sender, ContactSender, SendError, SenderConfig, SimulatedSender, TimeoutSender,
    DEFAULT_SIMULATED_DELAY,
};

/// The four contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Form `name` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Your Message",
        }
    }

    pub fn all() -> &'static [ContactField] {
        &[
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ContactField::Name),
            "email" => Ok(ContactField::Email),
            "subject" => Ok(ContactField::Subject),
            "message" => Ok(ContactField::Message),
            other => Err(FolioError::UnknownField(other.to_string())),
        }
    }
}

/// The values handed to a [`ContactSender`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Status of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Succeeded => "succeeded",
            SubmissionStatus::Failed => "failed",
        }
    }
}

/// Fields that did not pass validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid contact form (missing: {missing:?}, malformed email: {malformed_email})")]
pub struct ValidationError {
    /// Fields empty after trimming
    pub missing: Vec<ContactField>,
    /// Email present but not shaped like `local@domain`
    pub malformed_email: bool,
}

/// Why `submit` did not start a delivery
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A delivery is already in flight
    #[error("A submission is already in flight")]
    AlreadySubmitting,
}

/// Identifies one delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(u64);

/// Ticket for an accepted submission.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub id: SubmissionId,
    pub message: ContactMessage,
}

/// Result of running a [`PendingSubmission`] through a sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub id: SubmissionId,
    pub outcome: Result<(), SendError>,
}

impl PendingSubmission {
    /// Run the sender. Does not touch the controller; feed the result to
    /// [`SubmissionController::complete`].
    pub async fn deliver<S>(self, sender: &S) -> Completion
    where
        S: ContactSender + ?Sized,
    {
        let outcome = sender.send(&self.message).await;
        Completion {
            id: self.id,
            outcome,
        }
    }
}

/// Owns the contact form values and the submission state machine.
#[derive(Debug, Default)]
pub struct SubmissionController {
    fields: ContactMessage,
    status: SubmissionStatus,
    in_flight: Option<SubmissionId>,
    next_id: u64,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn field(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    /// Store `value` verbatim. Rejected while a submission is in flight.
    ///
    /// Editing after a success starts a fresh form (`Idle`); after a failure
    /// the status stays `Failed` until the next submit.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) -> FolioResult<()> {
        if self.is_submitting() {
            tracing::debug!(%field, "Ignoring edit while submitting");
            return Err(FolioError::SubmissionInFlight);
        }

        *self.fields.slot(field) = value.into();
        if self.status == SubmissionStatus::Succeeded {
            self.status = SubmissionStatus::Idle;
        }
        Ok(())
    }

    /// Same as [`update_field`](Self::update_field), keyed by form `name`.
    pub fn update_field_named(&mut self, name: &str, value: impl Into<String>) -> FolioResult<()> {
        let field = name.parse::<ContactField>()?;
        self.update_field(field, value)
    }

    /// Every field must be non-empty after trimming, and the email must
    /// look like `local@domain`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<ContactField> = ContactField::all()
            .iter()
            .copied()
            .filter(|f| self.fields.get(*f).trim().is_empty())
            .collect();

        let email = self.fields.email.trim();
        let malformed_email = !email.is_empty() && !looks_like_email(email);

        if missing.is_empty() && !malformed_email {
            Ok(())
        } else {
            Err(ValidationError {
                missing,
                malformed_email,
            })
        }
    }

    /// Validate and, if valid, move to `Submitting`.
    ///
    /// Neither error changes the status or the fields.
    pub fn submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.is_submitting() {
            tracing::debug!("Submit ignored, delivery already in flight");
            return Err(SubmitError::AlreadySubmitting);
        }

        if let Err(err) = self.validate() {
            tracing::debug!(missing = ?err.missing, malformed_email = err.malformed_email, "Contact form invalid");
            return Err(err.into());
        }

        self.next_id += 1;
        let id = SubmissionId(self.next_id);
        self.in_flight = Some(id);
        self.status = SubmissionStatus::Submitting;
        tracing::info!(attempt = self.next_id, "Submitting contact form");

        Ok(PendingSubmission {
            id,
            message: self.fields.clone(),
        })
    }

    /// Apply the outcome of delivery `id`.
    ///
    /// Returns the notification to show, or `None` when `id` is not the
    /// in-flight submission (stale or unknown completion).
    pub fn complete(&mut self, id: SubmissionId, outcome: Result<(), SendError>) -> Option<Notification> {
        if self.in_flight != Some(id) {
            tracing::warn!(?id, "Ignoring completion for a submission that is not in flight");
            return None;
        }
        self.in_flight = None;

        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Succeeded;
                self.fields = ContactMessage::default();
                tracing::info!("Contact message sent");
                Some(Notification::sent())
            }
            Err(err) => {
                self.status = SubmissionStatus::Failed;
                tracing::warn!(error = %err, "Contact message delivery failed");
                Some(Notification::send_failed())
            }
        }
    }

    /// Convenience for callers holding the controller across the await.
    pub async fn submit_with<S>(&mut self, sender: &S) -> Result<Option<Notification>, SubmitError>
    where
        S: ContactSender + ?Sized,
    {
        let pending = self.submit()?;
        let completion = pending.deliver(sender).await;
        Ok(self.complete(completion.id, completion.outcome))
    }

    /// Fresh form: empty fields, `Idle`, nothing in flight.
    pub fn reset(&mut self) {
        self.fields = ContactMessage::default();
        self.status = SubmissionStatus::Idle;
        self.in_flight = None;
    }
}

/// Loose `local@domain` check, roughly what a browser's email input enforces.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;

    fn filled() -> SubmissionController {
        let mut form = SubmissionController::new();
        form.update_field(ContactField::Name, "Jane").unwrap();
        form.update_field(ContactField::Email, "jane@x.com").unwrap();
        form.update_field(ContactField::Subject, "Hi").unwrap();
        form.update_field(ContactField::Message, "Hello").unwrap();
        form
    }

    #[test]
    fn field_names_parse() {
        for field in ContactField::all() {
            assert_eq!(field.as_str().parse::<ContactField>().unwrap(), *field);
        }
        assert!(matches!(
            "phone".parse::<ContactField>(),
            Err(FolioError::UnknownField(name)) if name == "phone"
        ));
    }

    #[test]
    fn new_form_is_empty_and_idle() {
        let form = SubmissionController::new();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields(), &ContactMessage::default());
    }

    #[test]
    fn values_stored_verbatim() {
        let mut form = SubmissionController::new();
        form.update_field_named("subject", "  spaced  ").unwrap();
        assert_eq!(form.field(ContactField::Subject), "  spaced  ");
    }

    #[test]
    fn whitespace_only_is_missing() {
        let mut form = filled();
        form.update_field(ContactField::Message, " \n\t ").unwrap();
        let err = form.validate().unwrap_err();
        assert_eq!(err.missing, vec![ContactField::Message]);
        assert!(!err.malformed_email);
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("jane@x.com"));
        assert!(looks_like_email("a@b"));
        assert!(!looks_like_email("jane"));
        assert!(!looks_like_email("@x.com"));
        assert!(!looks_like_email("jane@"));
        assert!(!looks_like_email("ja ne@x.com"));
        assert!(!looks_like_email("a@b@c"));
    }

    #[test]
    fn invalid_submit_keeps_idle() {
        let mut form = filled();
        form.update_field(ContactField::Email, "not-an-email").unwrap();
        let err = form.submit().unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(ValidationError { malformed_email: true, .. })));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn submit_locks_fields() {
        let mut form = filled();
        let pending = form.submit().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert_eq!(pending.message.name, "Jane");

        assert!(matches!(
            form.update_field(ContactField::Name, "Mallory"),
            Err(FolioError::SubmissionInFlight)
        ));
        assert_eq!(form.field(ContactField::Name), "Jane");
        assert_eq!(form.submit().unwrap_err(), SubmitError::AlreadySubmitting);
    }

    #[test]
    fn success_clears_fields() {
        let mut form = filled();
        let pending = form.submit().unwrap();
        let toast = form.complete(pending.id, Ok(())).unwrap();

        assert_eq!(toast.kind, NotificationKind::Success);
        assert_eq!(form.status(), SubmissionStatus::Succeeded);
        assert_eq!(form.fields(), &ContactMessage::default());

        form.update_field(ContactField::Name, "Again").unwrap();
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn failure_keeps_fields() {
        let mut form = filled();
        let before = form.fields().clone();
        let pending = form.submit().unwrap();
        let toast = form
            .complete(pending.id, Err(SendError::Transport("offline".into())))
            .unwrap();

        assert_eq!(toast.kind, NotificationKind::Failure);
        assert!(!toast.description.contains("offline"));
        assert_eq!(form.status(), SubmissionStatus::Failed);
        assert_eq!(form.fields(), &before);

        // Still failed after an edit, until resubmitted
        form.update_field(ContactField::Subject, "Hi again").unwrap();
        assert_eq!(form.status(), SubmissionStatus::Failed);
    }

    #[test]
    fn stale_completion_ignored() {
        let mut form = filled();
        let first = form.submit().unwrap();
        form.complete(first.id, Err(SendError::Transport("x".into())));

        let second = form.submit().unwrap();
        assert!(form.complete(first.id, Ok(())).is_none());
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert!(form.complete(second.id, Ok(())).is_some());
    }

    #[test]
    fn reset_returns_to_fresh_form() {
        let mut form = filled();
        form.submit().unwrap();
        form.reset();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields(), &ContactMessage::default());
    }
}
