//! Contact form submission use case

use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::{info, warn};

use crate::application::errors::ApplicationError;
use crate::config::EmailConfig;
use crate::infrastructure::api_clients::email::{EmailSender, OutboundEmail};
use crate::infrastructure::rate_limiter::{SubmissionDecision, SubmissionLimiter};

/// A validated contact form submission
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Outcome of an accepted submission
#[derive(Debug, Clone)]
pub struct ContactReceipt {
    pub message: String,
    pub id: Option<String>,
}

const MIN_MESSAGE_LENGTH: usize = 10;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Validate a submission against the form rules
pub fn validate_submission(submission: &ContactSubmission) -> Result<(), ApplicationError> {
    if submission.name.is_empty() || submission.email.is_empty() || submission.message.is_empty() {
        return Err(ApplicationError::validation(
            "Name, email, and message are required",
        ));
    }

    if !email_pattern().is_match(&submission.email) {
        return Err(ApplicationError::validation("Invalid email format"));
    }

    if submission.message.chars().count() < MIN_MESSAGE_LENGTH {
        return Err(ApplicationError::validation(
            "Message must be at least 10 characters",
        ));
    }

    Ok(())
}

/// Relays validated contact submissions to the transactional email provider.
///
/// The rate limit is consulted before validation, so rejected attempts still
/// count toward the window.
pub struct SubmitContactUseCase {
    sender: Arc<dyn EmailSender>,
    limiter: Arc<SubmissionLimiter>,
    config: EmailConfig,
}

impl SubmitContactUseCase {
    pub fn new(
        sender: Arc<dyn EmailSender>,
        limiter: Arc<SubmissionLimiter>,
        config: EmailConfig,
    ) -> Self {
        Self {
            sender,
            limiter,
            config,
        }
    }

    pub async fn execute(
        &self,
        client_id: &str,
        submission: ContactSubmission,
    ) -> Result<ContactReceipt, ApplicationError> {
        if let SubmissionDecision::Rejected {
            retry_after_seconds,
        } = self.limiter.check(client_id).await
        {
            return Err(ApplicationError::RateLimited {
                retry_after_seconds,
            });
        }

        validate_submission(&submission)?;

        if self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .is_none()
        {
            warn!("Contact submission received but no email API key is configured");
            return Err(ApplicationError::configuration(
                "Email API key is not configured",
            ));
        }

        let email = compose_email(&self.config, &submission);
        let id = self.sender.send(&email).await?;

        info!(client_id, "Contact submission relayed");
        Ok(ContactReceipt {
            message: "Message received! Thank you for your submission.".to_string(),
            id,
        })
    }
}

fn compose_email(config: &EmailConfig, submission: &ContactSubmission) -> OutboundEmail {
    let text = format!(
        "Name: {}\nEmail: {}\nMessage: {}",
        submission.name, submission.email, submission.message
    );

    let html = format!(
        "<div style=\"font-family: sans-serif; max-width: 600px; margin: 0 auto;\">\
         <h2>New Contact Form Submission</h2>\
         <p><strong>From:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <h3>Message:</h3>\
         <p>{}</p>\
         </div>",
        escape_html(&submission.name),
        escape_html(&submission.email),
        escape_html(&submission.message).replace('\n', "<br>")
    );

    OutboundEmail {
        from: config.from_address.clone(),
        to: vec![config.to_address.clone()],
        subject: format!("New contact form submission from {}", submission.name),
        reply_to: Some(submission.email.clone()),
        text,
        html,
    }
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
