//! # WhatsApp API Client
//!
//! This module provides a client for sending messages to WhatsApp Business API.
//! It handles authentication and delivery of the consent document.

use super::outgoing_schemas::{OutgoingDocumentMessage, WhatsAppMessageResponse};
use crate::{config::AppConfig, services::MessagingService};
use anyhow::{Context, Result};
use async_trait::async_trait;

/// WhatsApp API client for sending messages
pub struct WhatsAppClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// WhatsApp Business API endpoint for sending messages
    endpoint: String,
    /// Authentication token
    auth_token: String,
    document_link: String,
    document_filename: String,
    document_caption: Option<String>,
}

impl WhatsAppClient {
    /// Creates a new WhatsApp client from the application configuration
    pub fn new(app_config: &AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(app_config.whatsapp_timeout())
            .build()
            .context("failed to build WhatsApp HTTP client")?;

        Ok(Self {
            client,
            endpoint: app_config.whatsapp_send_msg_endpoint(),
            auth_token: app_config.token.clone(),
            document_link: app_config.document_link.clone(),
            document_filename: app_config.document_filename.clone(),
            document_caption: app_config.document_caption.clone(),
        })
    }

    /// Sends a document message
    ///
    /// # Arguments
    /// * `message` - Document message to send
    ///
    /// # Returns
    /// * `Result<WhatsAppMessageResponse>` - Response from WhatsApp API
    pub async fn send_document_message(
        &self,
        message: &OutgoingDocumentMessage,
    ) -> Result<WhatsAppMessageResponse> {
        self.send_message(message).await
    }

    /// Internal method to send any message type to WhatsApp API
    async fn send_message<T: serde::Serialize>(
        &self,
        message: &T,
    ) -> Result<WhatsAppMessageResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.auth_token)
            .header("Content-Type", "application/json")
            .json(message)
            .send()
            .await
            .context("Failed to send request to WhatsApp API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());

            anyhow::bail!("WhatsApp API returned error status {}: {}", status, body);
        }

        let whatsapp_response: WhatsAppMessageResponse = response
            .json()
            .await
            .context("Failed to parse WhatsApp API response")?;

        Ok(whatsapp_response)
    }
}

#[async_trait]
impl MessagingService for WhatsAppClient {
    async fn send_document(&self, to: &str) -> Result<WhatsAppMessageResponse> {
        let message = OutgoingDocumentMessage::new_with_link(
            to.to_string(),
            self.document_link.clone(),
            self.document_filename.clone(),
        )
        .with_caption(self.document_caption.clone());

        self.send_document_message(&message).await
    }
}
