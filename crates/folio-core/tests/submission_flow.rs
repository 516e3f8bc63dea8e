//! Contact form submission flows against fake senders.
//!
//! Senders here resolve either immediately or when the test releases them
//! through a oneshot channel, so every intermediate state can be observed.
//! The EmailJS tests talk to a one-shot HTTP server on localhost.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use folio_core::{
    ContactField, ContactMessage, ContactSender, EmailJsSender, NotificationKind, SendError,
    SimulatedSender, SubmissionController, SubmissionStatus, SubmitError, TimeoutSender,
};
use futures::future::BoxFuture;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

// ============================================================================
// Fake senders
// ============================================================================

/// Replays scripted outcomes and records every message it was given.
#[derive(Default)]
struct ScriptedSender {
    outcomes: Mutex<VecDeque<Result<(), SendError>>>,
    sent: Mutex<Vec<ContactMessage>>,
}

impl ScriptedSender {
    fn new(outcomes: impl IntoIterator<Item = Result<(), SendError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<ContactMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl ContactSender for ScriptedSender {
    fn send<'a>(&'a self, message: &'a ContactMessage) -> BoxFuture<'a, Result<(), SendError>> {
        self.sent.lock().unwrap().push(message.clone());
        let outcome = self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(()));
        Box::pin(async move { outcome })
    }
}

/// Blocks until the test sends the outcome through the gate.
struct GatedSender {
    gate: Mutex<Option<oneshot::Receiver<Result<(), SendError>>>>,
    calls: AtomicUsize,
}

impl GatedSender {
    fn new() -> (Self, oneshot::Sender<Result<(), SendError>>) {
        let (tx, rx) = oneshot::channel();
        let sender = Self {
            gate: Mutex::new(Some(rx)),
            calls: AtomicUsize::new(0),
        };
        (sender, tx)
    }
}

impl ContactSender for GatedSender {
    fn send<'a>(&'a self, _message: &'a ContactMessage) -> BoxFuture<'a, Result<(), SendError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().unwrap().take();
        Box::pin(async move {
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(SendError::Transport("gate dropped".into()))),
                None => Err(SendError::Transport("gate already used".into())),
            }
        })
    }
}

/// Answer a single HTTP request with `status` and `body`, returning the
/// base URL and the raw request text.
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });

    (format!("http://{}", addr), handle)
}

/// Read headers, then as many body bytes as Content-Length announces.
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn emailjs_at(endpoint: &str) -> EmailJsSender {
    EmailJsSender::new("service_1".into(), "template_1".into(), "pk".into())
        .with_endpoint(endpoint)
}

fn jane() -> SubmissionController {
    let mut form = SubmissionController::new();
    form.update_field(ContactField::Name, "Jane").unwrap();
    form.update_field(ContactField::Email, "jane@x.com").unwrap();
    form.update_field(ContactField::Subject, "Hi").unwrap();
    form.update_field(ContactField::Message, "Hello").unwrap();
    form
}

fn jane_message() -> ContactMessage {
    ContactMessage {
        name: "Jane".into(),
        email: "jane@x.com".into(),
        subject: "Hi".into(),
        message: "Hello".into(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_successful_submission_resets_form() {
    let sender = ScriptedSender::new([Ok(())]);
    let mut form = jane();

    let pending = form.submit().unwrap();
    assert_eq!(form.status(), SubmissionStatus::Submitting);

    let completion = pending.deliver(&sender).await;
    let toast = form.complete(completion.id, completion.outcome).unwrap();

    assert_eq!(sender.sent(), vec![jane_message()]);
    assert_eq!(form.status(), SubmissionStatus::Succeeded);
    assert_eq!(toast.kind, NotificationKind::Success);
    for field in ContactField::all() {
        assert_eq!(form.field(*field), "");
    }
}

#[tokio::test]
async fn test_empty_field_never_reaches_sender() {
    let sender = ScriptedSender::default();
    let mut form = jane();
    form.update_field(ContactField::Message, "").unwrap();

    let result = form.submit_with(&sender).await;

    match result {
        Err(SubmitError::Invalid(err)) => assert_eq!(err.missing, vec![ContactField::Message]),
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert!(sender.sent().is_empty());
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn test_failure_keeps_fields_and_retry_succeeds() {
    let sender = ScriptedSender::new([Err(SendError::Rejected {
        status: 500,
        body: "upstream".into(),
    })]);
    let mut form = jane();

    let toast = form.submit_with(&sender).await.unwrap().unwrap();
    assert_eq!(toast.kind, NotificationKind::Failure);
    assert_eq!(form.status(), SubmissionStatus::Failed);
    assert_eq!(form.fields(), &jane_message());

    // Retry without retyping
    let toast = form.submit_with(&sender).await.unwrap().unwrap();
    assert_eq!(toast.kind, NotificationKind::Success);
    assert_eq!(form.status(), SubmissionStatus::Succeeded);
    assert_eq!(sender.sent(), vec![jane_message(), jane_message()]);
}

#[tokio::test]
async fn test_double_submit_sends_once() {
    let (sender, release) = GatedSender::new();
    let sender = Arc::new(sender);
    let mut form = jane();

    let pending = form.submit().unwrap();
    let delivery = tokio::spawn({
        let sender = sender.clone();
        async move { pending.deliver(sender.as_ref()).await }
    });

    // Second click while the first is unresolved
    assert_eq!(form.submit().unwrap_err(), SubmitError::AlreadySubmitting);
    assert_eq!(form.status(), SubmissionStatus::Submitting);

    release.send(Ok(())).unwrap();
    let completion = delivery.await.unwrap();
    form.complete(completion.id, completion.outcome);

    assert_eq!(sender.calls.load(Ordering::SeqCst), 1);
    assert_eq!(form.status(), SubmissionStatus::Succeeded);
}

#[tokio::test]
async fn test_edits_ignored_while_submitting() {
    let (sender, release) = GatedSender::new();
    let mut form = jane();

    let pending = form.submit().unwrap();
    let delivery = pending.deliver(&sender);

    for field in ContactField::all() {
        assert!(form.update_field(*field, "changed").is_err());
    }
    assert_eq!(form.fields(), &jane_message());

    release
        .send(Err(SendError::Transport("offline".into())))
        .unwrap();
    let completion = delivery.await;
    form.complete(completion.id, completion.outcome);

    assert_eq!(form.status(), SubmissionStatus::Failed);
    assert_eq!(form.fields(), &jane_message());
}

#[tokio::test]
async fn test_unresolved_sender_stays_submitting() {
    let (sender, _release) = GatedSender::new();
    let mut form = jane();

    let pending = form.submit().unwrap();
    let delivery = pending.deliver(&sender);
    let timed = tokio::time::timeout(Duration::from_millis(20), delivery).await;

    assert!(timed.is_err());
    assert_eq!(form.status(), SubmissionStatus::Submitting);
}

#[tokio::test]
async fn test_emailjs_success_status_delivers() {
    let (endpoint, server) = serve_once("200 OK", "OK").await;
    let sender = emailjs_at(&endpoint);
    let mut form = jane();

    let toast = form.submit_with(&sender).await.unwrap().unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("POST /api/v1.0/email/send "));
    assert!(request.contains("\"from_email\":\"jane@x.com\""));
    assert_eq!(toast.kind, NotificationKind::Success);
    assert_eq!(form.status(), SubmissionStatus::Succeeded);
}

#[tokio::test]
async fn test_emailjs_rejection_keeps_fields() {
    let (endpoint, server) =
        serve_once("400 Bad Request", "The user_id parameter is required").await;
    let sender = emailjs_at(&endpoint);

    let result = sender.send(&jane_message()).await;
    server.await.unwrap();
    assert_eq!(
        result,
        Err(SendError::Rejected {
            status: 400,
            body: "The user_id parameter is required".into(),
        })
    );

    let (endpoint, server) =
        serve_once("400 Bad Request", "The user_id parameter is required").await;
    let sender = emailjs_at(&endpoint);
    let mut form = jane();
    let toast = form.submit_with(&sender).await.unwrap().unwrap();
    server.await.unwrap();

    assert_eq!(toast.kind, NotificationKind::Failure);
    assert_eq!(toast.title, "Message not sent");
    assert_eq!(form.status(), SubmissionStatus::Failed);
    assert_eq!(form.fields(), &jane_message());
}

#[tokio::test]
async fn test_emailjs_unreachable_is_transport_error() {
    // Bind then drop so the port is known to be closed
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let sender = emailjs_at(&format!("http://{}", addr));
    let result = sender.send(&jane_message()).await;

    assert!(matches!(result, Err(SendError::Transport(_))), "got {:?}", result);
}

#[tokio::test(start_paused = true)]
async fn test_timeout_fails_submission() {
    let sender = TimeoutSender::new(
        SimulatedSender::new(Duration::from_secs(60)),
        Duration::from_secs(1),
    );
    let mut form = jane();
    let start = tokio::time::Instant::now();

    let toast = form.submit_with(&sender).await.unwrap().unwrap();

    assert!(start.elapsed() < Duration::from_secs(60));
    assert_eq!(toast.kind, NotificationKind::Failure);
    assert_eq!(toast.title, "Message not sent");
    assert_eq!(form.status(), SubmissionStatus::Failed);
    assert_eq!(form.fields(), &jane_message());
}
