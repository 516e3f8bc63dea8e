//! EmailJS delivery.
//!
//! One `POST /api/v1.0/email/send` per message. The four form values are
//! passed as template variables; the service id, template id and public key
//! identify the account.

use futures::future::BoxFuture;
use serde::Serialize;

use super::sender::{ContactSender, SendError};
use super::ContactMessage;

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com";

const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Sends contact messages through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsSender {
    client: reqwest::Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsSender {
    pub fn new(service_id: String, template_id: String, public_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
            service_id,
            template_id,
            public_key,
        }
    }

    /// Override the API base URL (self-hosted proxy, tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), SEND_PATH)
    }

    fn request_body<'a>(&'a self, message: &'a ContactMessage) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                from_name: &message.name,
                from_email: &message.email,
                subject: &message.subject,
                message: &message.message,
            },
        }
    }
}

impl ContactSender for EmailJsSender {
    fn send<'a>(&'a self, message: &'a ContactMessage) -> BoxFuture<'a, Result<(), SendError>> {
        Box::pin(async move {
            let url = self.url();
            tracing::debug!(%url, "Sending contact message via EmailJS");

            let response = self
                .client
                .post(&url)
                .json(&self.request_body(message))
                .send()
                .await?;

            let status = response.status();
            if status.is_success() {
                tracing::info!("Contact message delivered");
                return Ok(());
            }

            let body = response.text().await.unwrap_or_default();
            Err(SendError::Rejected {
                status: status.as_u16(),
                body,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_endpoint() {
        let sender = EmailJsSender::new("s".into(), "t".into(), "k".into())
            .with_endpoint("http://localhost:8080/");
        assert_eq!(sender.url(), "http://localhost:8080/api/v1.0/email/send");
    }

    #[test]
    fn request_body_shape() {
        let sender = EmailJsSender::new("service_1".into(), "template_1".into(), "pk".into());
        let message = ContactMessage {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        };

        let json = serde_json::to_value(sender.request_body(&message)).unwrap();
        assert_eq!(json["service_id"], "service_1");
        assert_eq!(json["template_id"], "template_1");
        assert_eq!(json["user_id"], "pk");
        assert_eq!(json["template_params"]["from_name"], "Jane");
        assert_eq!(json["template_params"]["from_email"], "jane@x.com");
        assert_eq!(json["template_params"]["subject"], "Hi");
        assert_eq!(json["template_params"]["message"], "Hello");
    }
}
