//! WhatsApp webhook endpoint handlers
//!
//! This module handles incoming webhook requests from WhatsApp Business API.
//! It implements both the verification endpoint (GET) and the webhook receiver (POST).

use super::handler;
use crate::{errors, webhook::AppState};
use ntex::{util::Bytes, web};
use serde::Deserialize;

/// Query parameters for webhook verification
///
/// All fields are optional so that an incomplete handshake is answered with
/// 403 instead of an extractor error.
#[derive(Debug, Default, Deserialize)]
pub struct VerifyQuery {
    /// The mode parameter, should be "subscribe"
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    /// The verification token from WhatsApp
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    /// The challenge string to echo back
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

impl VerifyQuery {
    /// Checks the handshake against the configured verify token
    pub fn is_valid_subscription(&self, expected_token: &str) -> bool {
        self.mode.as_deref() == Some("subscribe")
            && self.verify_token.as_deref() == Some(expected_token)
    }
}

/// Webhook verification endpoint (GET)
///
/// WhatsApp sends a GET request to verify the webhook URL.
/// This endpoint validates the verify token and returns the challenge.
///
/// # Query Parameters
/// - `hub.mode` - Should be "subscribe"
/// - `hub.verify_token` - Token configured in WhatsApp dashboard
/// - `hub.challenge` - Challenge string to echo back
///
/// # Returns
/// - 200 with challenge string if verification succeeds
/// - 403 if verification fails
#[web::get("")]
pub async fn verify(
    query: web::types::Query<VerifyQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let query = query.into_inner();

    if !query.is_valid_subscription(&app_state.verify_token) {
        return Err(errors::WebhookError::VerificationFailed.into());
    }

    logfire::info!("Webhook verification successful");

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain")
        .body(query.challenge.unwrap_or_default()))
}

/// Webhook receiver endpoint (POST)
///
/// Receives webhook events from WhatsApp Business API.
///
/// The raw body is taken instead of a typed JSON extractor so the `object`
/// check runs before the envelope shape is validated, whatever the content type.
///
/// # Returns
/// - 200 once every document delivery has been started, without waiting for them
/// - 404 if the payload is not a WhatsApp business account event
/// - 400 if the body is not JSON or the WhatsApp envelope is malformed
#[web::post("")]
pub async fn receive(
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let _span = logfire::span!("whatsapp_webhook").entered();

    let payload = handler::parse_webhook_payload(&body)?;
    logfire::info!(
        "Received webhook: object={object}, entries={entries}",
        object = &payload.object,
        entries = payload.entry.len().to_string()
    );

    // Handles are dropped on purpose: sends run detached from the response
    let sends = handler::process_webhook(&payload, &app_state.messaging_service)?;
    if !sends.is_empty() {
        logfire::info!(
            "Started {count} document deliveries",
            count = sends.len().to_string()
        );
    }

    Ok(web::HttpResponse::Ok().json(&serde_json::json!({
        "status": "received"
    })))
}
