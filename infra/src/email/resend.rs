//! Resend Email Service Implementation
//!
//! Sends plain-text email through `POST {api_url}/emails` with bearer auth.
//! A single attempt is made per message.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use otp_core::NotifierTrait;
use otp_shared::config::EmailConfig;

use super::mask_email;
use crate::InfrastructureError;

const SERVICE: &str = "resend";

/// Request body for the send endpoint
#[derive(Debug, Serialize)]
pub(crate) struct SendEmailRequest<'a> {
    pub from: &'a str,
    pub to: [&'a str; 1],
    pub subject: &'a str,
    pub text: &'a str,
}

/// Response body of the send endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct SendEmailResponse {
    pub id: String,
}

/// Resend email service
pub struct ResendEmailService {
    client: Client,
    config: EmailConfig,
}

impl ResendEmailService {
    /// Create a new Resend service; a missing API key is reported per send
    pub fn new(config: EmailConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client with timeout, using defaults: {}", e);
                Client::new()
            });

        info!("Resend email service initialized with sender {}", config.from);
        Self { client, config }
    }

    pub(crate) fn endpoint(&self) -> String {
        format!("{}/emails", self.config.api_url.trim_end_matches('/'))
    }

    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| InfrastructureError::Config("RESEND_API_KEY is not set".to_string()))?;

        let request = SendEmailRequest {
            from: &self.config.from,
            to: [to],
            subject,
            text: body,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(
                target: "email_service",
                provider = SERVICE,
                status = status.as_u16(),
                "Email provider rejected message: {}",
                detail
            );
            return Err(InfrastructureError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        let sent: SendEmailResponse = response.json().await?;
        Ok(sent.id)
    }
}

#[async_trait]
impl NotifierTrait for ResendEmailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        match self.send_email(to, subject, body).await {
            Ok(message_id) => {
                info!(
                    target: "email_service",
                    provider = SERVICE,
                    to = %mask_email(to),
                    message_id = %message_id,
                    "Email sent"
                );
                Ok(message_id)
            }
            Err(e) => {
                error!(
                    target: "email_service",
                    provider = SERVICE,
                    to = %mask_email(to),
                    "Failed to send email: {}",
                    e
                );
                Err(e.to_string())
            }
        }
    }
}
