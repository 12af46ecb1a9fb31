//! # Webhook Delivery
//!
//! A snippet is delivered with exactly one HTTP POST. There is no retry, no
//! backoff and no local queue: a failed delivery is reported and the
//! invocation ends.
//!
//! The HTTP client sits behind the [`Transport`] trait so the delivery rules
//! (URL required, optional auth header, status interpretation) can be tested
//! without a network:
//! - Production: [`HttpTransport`] (blocking `reqwest`, 10 second timeout)
//! - Testing: any recording fake
//!
//! Status handling: anything `>= 400` is a [`DevstashError::Delivery`] carrying
//! the response body. Connection, DNS and timeout failures surface as
//! [`DevstashError::Transport`].

use crate::config::Settings;
use crate::envelope::SnippetEnvelope;
use crate::error::{DevstashError, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// One outbound request, fully prepared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookRequest {
    pub url: String,
    pub body: Vec<u8>,
    /// Sent as the raw `Authorization` value, no scheme prefix.
    pub auth_token: Option<String>,
}

/// What came back from the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

/// Performs the actual POST.
pub trait Transport {
    fn post_json(&self, request: &WebhookRequest) -> Result<WebhookResponse>;
}

/// Blocking HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("devstash/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, request: &WebhookRequest) -> Result<WebhookResponse> {
        let mut builder = self
            .client
            .post(&request.url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(request.body.clone());
        if let Some(token) = &request.auth_token {
            builder = builder.header(AUTHORIZATION, token.as_str());
        }

        tracing::debug!(url = %request.url, bytes = request.body.len(), "posting snippet");
        let response = builder.send()?;
        let status = response.status().as_u16();
        // The body is only diagnostic; an unreadable one is reported as empty.
        let body = response.text().unwrap_or_default();
        tracing::debug!(status, "webhook responded");

        Ok(WebhookResponse { status, body })
    }
}

/// Serializes `envelope` and delivers it to the configured webhook.
///
/// Fails before touching `transport` when no webhook URL is configured.
pub fn deliver<T: Transport + ?Sized>(
    transport: &T,
    settings: &Settings,
    envelope: SnippetEnvelope,
) -> Result<WebhookResponse> {
    if settings.webhook_url.is_empty() {
        return Err(DevstashError::WebhookNotConfigured);
    }

    let auth_token = if settings.auth_token.is_empty() {
        None
    } else {
        Some(settings.auth_token.clone())
    };
    let request = WebhookRequest {
        url: settings.webhook_url.clone(),
        body: envelope.to_json()?,
        auth_token,
    };

    let response = transport.post_json(&request)?;
    if response.status >= 400 {
        return Err(DevstashError::Delivery {
            status: response.status,
            body: response.body,
        });
    }
    Ok(response)
}
