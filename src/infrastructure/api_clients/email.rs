//! Transactional email API client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::EmailConfig;

/// Outbound email message
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub reply_to: Option<String>,
    pub text: String,
    pub html: String,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: Option<String>,
}

/// Error talking to the email provider
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Email request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Email provider returned {status}: {message}")]
    Provider { status: StatusCode, message: String },

    #[error("Failed to decode email provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Delivery channel for contact submissions
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send one message; returns the provider's message id when available
    async fn send(&self, email: &OutboundEmail) -> Result<Option<String>, EmailError>;
}

/// Client for a Resend-style transactional email HTTP API
pub struct EmailClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl EmailClient {
    /// Create a new client. A missing API key is tolerated here; the contact
    /// use case refuses to send before the request reaches the wire.
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("folio-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
        })
    }
}

#[async_trait]
impl EmailSender for EmailClient {
    async fn send(&self, email: &OutboundEmail) -> Result<Option<String>, EmailError> {
        let url = format!("{}/emails", self.base_url);

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ProviderError>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(EmailError::Provider { status, message });
        }

        let payload: SendResponse = serde_json::from_str(&body)?;
        Ok(payload.id)
    }
}
