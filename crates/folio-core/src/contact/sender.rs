//! Delivery of a submitted contact message.
//!
//! The controller only sees [`ContactSender`]. Concrete senders:
//! - [`SimulatedSender`]: resolves after a delay, nothing leaves the machine
//! - [`EmailJsSender`]: transactional email REST call
//! - [`TimeoutSender`]: wraps another sender with a deadline

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use thiserror::Error;

use super::emailjs::{EmailJsSender, DEFAULT_EMAILJS_ENDPOINT};
use super::ContactMessage;

/// Why a delivery attempt failed. Logged, never shown verbatim to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// The transport could not reach the service
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("Rejected by email service (status {status}): {body}")]
    Rejected { status: u16, body: String },

    /// No answer within the configured deadline
    #[error("Delivery timed out after {0:?}")]
    TimedOut(Duration),
}

impl From<reqwest::Error> for SendError {
    fn from(err: reqwest::Error) -> Self {
        SendError::Transport(err.to_string())
    }
}

/// Delivers the four contact form values somewhere.
///
/// Implementations must not block; completion is observed by awaiting the
/// returned future.
pub trait ContactSender: Send + Sync {
    fn send<'a>(&'a self, message: &'a ContactMessage) -> BoxFuture<'a, Result<(), SendError>>;
}

impl<S: ContactSender + ?Sized> ContactSender for Arc<S> {
    fn send<'a>(&'a self, message: &'a ContactMessage) -> BoxFuture<'a, Result<(), SendError>> {
        (**self).send(message)
    }
}

/// Default delay of the simulated sender.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Pretends to deliver: waits, then succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedSender {
    delay: Duration,
}

impl SimulatedSender {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

impl ContactSender for SimulatedSender {
    fn send<'a>(&'a self, message: &'a ContactMessage) -> BoxFuture<'a, Result<(), SendError>> {
        Box::pin(async move {
            tracing::info!(
                from = %message.email,
                subject = %message.subject,
                "Simulating contact message delivery"
            );
            tokio::time::sleep(self.delay).await;
            Ok(())
        })
    }
}

/// Fails an inner sender that takes longer than `timeout`.
#[derive(Debug, Clone)]
pub struct TimeoutSender<S> {
    inner: S,
    timeout: Duration,
}

impl<S> TimeoutSender<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

impl<S: ContactSender> ContactSender for TimeoutSender<S> {
    fn send<'a>(&'a self, message: &'a ContactMessage) -> BoxFuture<'a, Result<(), SendError>> {
        Box::pin(async move {
            match tokio::time::timeout(self.timeout, self.inner.send(message)).await {
                Ok(result) => result,
                Err(_) => Err(SendError::TimedOut(self.timeout)),
            }
        })
    }
}

/// How the contact form delivers messages.
#[derive(Debug, Clone)]
pub struct SenderConfig {
    pub emailjs_service_id: Option<String>,
    pub emailjs_template_id: Option<String>,
    pub emailjs_public_key: Option<String>,
    pub emailjs_endpoint: String,
    /// Delay used by the simulated sender
    pub simulated_delay: Duration,
    /// Optional delivery deadline
    pub timeout: Option<Duration>,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            emailjs_service_id: None,
            emailjs_template_id: None,
            emailjs_public_key: None,
            emailjs_endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
            simulated_delay: DEFAULT_SIMULATED_DELAY,
            timeout: None,
        }
    }
}

impl SenderConfig {
    /// True when all three EmailJS identifiers are present and non-blank.
    pub fn has_emailjs(&self) -> bool {
        [
            &self.emailjs_service_id,
            &self.emailjs_template_id,
            &self.emailjs_public_key,
        ]
        .iter()
        .all(|v| v.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }
}

/// Pick a sender for `config`.
///
/// EmailJS when fully configured, the simulated sender otherwise. Wrapped
/// in a [`TimeoutSender`] when a deadline is set.
pub fn build_sender(config: &SenderConfig) -> Arc<dyn ContactSender> {
    let base: Arc<dyn ContactSender> = match (
        config.has_emailjs(),
        &config.emailjs_service_id,
        &config.emailjs_template_id,
        &config.emailjs_public_key,
    ) {
        (true, Some(service), Some(template), Some(key)) => {
            tracing::info!(service = %service, template = %template, "Using EmailJS sender");
            Arc::new(
                EmailJsSender::new(service.clone(), template.clone(), key.clone())
                    .with_endpoint(config.emailjs_endpoint.clone()),
            )
        }
        _ => {
            tracing::info!(
                delay_ms = config.simulated_delay.as_millis() as u64,
                "EmailJS not configured, contact messages will be simulated"
            );
            Arc::new(SimulatedSender::new(config.simulated_delay))
        }
    };

    match config.timeout {
        Some(timeout) => Arc::new(TimeoutSender::new(base, timeout)),
        None => base,
    }
}
