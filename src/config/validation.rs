//! Configuration validation module

use crate::config::{
    ApiConfig, CacheConfig, ContactConfig, DriveConfig, EmailConfig, GitHubConfig, ServerConfig,
};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Server configuration error: {message}")]
    Server { message: String },

    #[error("Cache configuration error: {message}")]
    Cache { message: String },

    #[error("API configuration error: {message}")]
    Api { message: String },

    #[error("Contact configuration error: {message}")]
    Contact { message: String },
}

impl ValidationError {
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    pub fn contact(message: impl Into<String>) -> Self {
        Self::Contact {
            message: message.into(),
        }
    }
}

fn require_http_url(url: &str, what: &str) -> Result<(), ValidationError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::api(format!(
            "{} must start with http:// or https://, got: {}",
            what, url
        )));
    }
    Ok(())
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // Note: u16 cannot exceed 65535, so we only need to check for 0
        if self.port == 0 {
            return Err(ValidationError::server(format!(
                "Port must be in range 1-65535, got {}",
                self.port
            )));
        }

        if self.host.is_empty() {
            return Err(ValidationError::server("Host cannot be empty".to_string()));
        }

        if self.request_timeout_seconds == 0 {
            return Err(ValidationError::server(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.ttl_seconds == 0 {
            return Err(ValidationError::cache(
                "Cache TTL must be greater than 0 seconds".to_string(),
            ));
        }

        if self.max_entries == 0 {
            return Err(ValidationError::cache(
                "Cache max_entries must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Validate for GitHubConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        require_http_url(&self.base_url, "GitHub base_url")?;

        if self.timeout_seconds == 0 {
            return Err(ValidationError::api(
                "GitHub timeout must be greater than 0 seconds".to_string(),
            ));
        }

        if self.default_username.trim().is_empty() {
            return Err(ValidationError::api(
                "GitHub default_username cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Validate for DriveConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        require_http_url(&self.base_url, "Drive base_url")?;

        if self.timeout_seconds == 0 {
            return Err(ValidationError::api(
                "Drive timeout must be greater than 0 seconds".to_string(),
            ));
        }

        Ok(())
    }
}

impl Validate for EmailConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        require_http_url(&self.base_url, "Email base_url")?;

        if self.timeout_seconds == 0 {
            return Err(ValidationError::api(
                "Email timeout must be greater than 0 seconds".to_string(),
            ));
        }

        if self.to_address.is_empty() || self.from_address.is_empty() {
            return Err(ValidationError::api(
                "Email from_address and to_address cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        self.github.validate()?;
        self.drive.validate()?;
        self.email.validate()?;
        Ok(())
    }
}

impl Validate for ContactConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.rate_limit.max_submissions == 0 {
            return Err(ValidationError::contact(
                "rate_limit.max_submissions must be greater than 0".to_string(),
            ));
        }

        if self.rate_limit.window_seconds == 0 {
            return Err(ValidationError::contact(
                "rate_limit.window_seconds must be greater than 0".to_string(),
            ));
        }

        if self.rate_limit.sweep_interval_seconds == 0 {
            return Err(ValidationError::contact(
                "rate_limit.sweep_interval_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
