//! Folio Core Library
//!
//! Renderer-independent behaviour behind the portfolio page.
//!
//! ## Overview
//!
//! The page itself is static markup. Two small mechanisms carry state:
//!
//! - **Reveal**: a [`VisibilityWatcher`] latches each registered element as
//!   "revealed" the first time it is sufficiently visible, driving the
//!   entrance animations.
//! - **Contact**: a [`SubmissionController`] owns the contact form fields and
//!   walks `Idle -> Submitting -> Succeeded | Failed` around an injected
//!   [`ContactSender`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{ContactField, SimulatedSender, SubmissionController};
//!
//! let sender = SimulatedSender::default();
//! let mut form = SubmissionController::new();
//! form.update_field(ContactField::Name, "Jane")?;
//! // ...remaining fields...
//!
//! let pending = form.submit()?;
//! let completion = pending.deliver(&sender).await;
//! if let Some(toast) = form.complete(completion.id, completion.outcome) {
//!     println!("{}: {}", toast.title, toast.description);
//! }
//! ```

pub mod contact;
pub mod error;
pub mod logging;
pub mod notify;
pub mod reveal;

// Re-exports
pub use contact::{
    build_sender, Completion, ContactField, ContactMessage, ContactSender, EmailJsSender,
    PendingSubmission, SendError, SenderConfig, SimulatedSender, SubmissionController,
    SubmissionId, SubmissionStatus, SubmitError, TimeoutSender, ValidationError,
    DEFAULT_EMAILJS_ENDPOINT, DEFAULT_SIMULATED_DELAY,
};
pub use error::{FolioError, FolioResult};
pub use notify::{Notification, NotificationKind, Toast, ToastId, ToastQueue};
pub use reveal::{
    AnyOf, ElementRect, Intersection, ScrollGeometry, Viewport, VisibilitySource,
    VisibilityWatcher, DEFAULT_THRESHOLD, REVEAL_VIEWPORT_FRACTION,
};
