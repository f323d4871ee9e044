//! # WhatsApp Webhook Handler
//!
//! This module handles incoming webhook events from WhatsApp Business API.
//! Patients answer the consent template with a quick reply button; an
//! "Aceptar" reply triggers delivery of the clinical history document.
//!
//! Deliveries are spawned and never awaited here: the webhook is acknowledged
//! as soon as every send has been started.

use super::schemas::{Message, Status, WebhookPayload};
use crate::{errors::WebhookError, services::ImplMessagingService};
use tokio::task::JoinHandle;

/// `object` value of every WhatsApp Business webhook event
pub const WHATSAPP_OBJECT: &str = "whatsapp_business_account";

/// Button label a patient taps to accept receiving the document
pub const ACCEPT_BUTTON_TEXT: &str = "Aceptar";
/// Button label a patient taps to decline receiving the document
pub const REJECT_BUTTON_TEXT: &str = "Rechazar";

/// Answer carried by a consent button reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentReply {
    Accept,
    Reject,
}

impl ConsentReply {
    /// Maps a button label to a reply. Unknown labels yield `None`.
    pub fn from_button_text(text: &str) -> Option<Self> {
        match text {
            ACCEPT_BUTTON_TEXT => Some(Self::Accept),
            REJECT_BUTTON_TEXT => Some(Self::Reject),
            _ => None,
        }
    }
}

/// Parses a raw webhook body.
///
/// The `object` discriminator is checked on the untyped JSON first, so that any
/// envelope not coming from a WhatsApp business account is reported as
/// [`WebhookError::UnknownObject`] whatever the rest of its shape.
pub fn parse_webhook_payload(body: &[u8]) -> Result<WebhookPayload, WebhookError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(WebhookError::UnknownObject(String::new()));
    }

    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| WebhookError::InvalidPayload(e.to_string()))?;

    let object = value.get("object");
    if object.and_then(serde_json::Value::as_str) != Some(WHATSAPP_OBJECT) {
        let object = match object {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        return Err(WebhookError::UnknownObject(object));
    }

    serde_json::from_value(value).map_err(|e| WebhookError::InvalidPayload(e.to_string()))
}

/// Extracts all messages from the webhook payload, in delivery order.
pub fn process_webhook_messages(payload: &WebhookPayload) -> Vec<&Message> {
    payload
        .entry
        .iter()
        .flat_map(|entry| &entry.changes)
        .flat_map(|change| &change.value.messages)
        .collect::<Vec<_>>()
}

/// Extracts all status updates from the webhook payload.
pub fn process_webhook_statuses(payload: &WebhookPayload) -> Vec<&Status> {
    payload
        .entry
        .iter()
        .flat_map(|entry| &entry.changes)
        .flat_map(|change| &change.value.statuses)
        .collect::<Vec<_>>()
}

/// Starts the document delivery for `to` on its own task.
///
/// Errors are logged inside the task and never leave it.
fn spawn_document_send(client: ImplMessagingService, to: String) -> JoinHandle<()> {
    tokio::spawn(async move {
        match client.send_document(&to).await {
            Ok(response) => logfire::info!(
                "Document sent to {to}: {message_ids}",
                to = &to,
                message_ids = response.message_ids()
            ),
            Err(e) => logfire::error!(
                "Failed to send document to {to}: {error}",
                to = &to,
                error = format!("{e:#}")
            ),
        }
    })
}

/// Handles a single incoming message
///
/// Only quick reply buttons are acted on; every other message type is ignored.
///
/// # Returns
///
/// The handle of the spawned document delivery, when the reply was an acceptance
pub fn handle_user_message(
    message: &Message,
    client: &ImplMessagingService,
) -> Option<JoinHandle<()>> {
    if !message.is_button() {
        logfire::info!(
            "Ignoring message of type {type}",
            r#type = &message.msg_type
        );
        return None;
    }

    let Some(button) = message.button.as_ref() else {
        logfire::warn!(
            "Button message {id} from {from} has no button content",
            id = &message.id,
            from = &message.from
        );
        return None;
    };

    logfire::info!(
        "Patient reply ({from}): {reply}",
        from = &message.from,
        reply = &button.text
    );

    match ConsentReply::from_button_text(&button.text) {
        Some(ConsentReply::Accept) => {
            logfire::info!(
                "Patient {from} accepted, sending document",
                from = &message.from
            );
            Some(spawn_document_send(client.clone(), message.from.clone()))
        }
        Some(ConsentReply::Reject) => {
            logfire::info!(
                "Patient {from} rejected, nothing is sent",
                from = &message.from
            );
            None
        }
        None => {
            logfire::warn!(
                "Unrecognised button reply from {from}: {reply}",
                from = &message.from,
                reply = &button.text
            );
            None
        }
    }
}

/// Logs the delivery status of a message sent earlier.
pub fn handle_message_status(status: &Status) {
    if let Some(reasons) = status.failure_reasons() {
        logfire::error!(
            "Message {id} to {recipient} failed: {reasons}",
            id = &status.id,
            recipient = &status.recipient_id,
            reasons = reasons
        );
        return;
    }

    logfire::info!(
        "Message {id} to {recipient} is {status}",
        id = &status.id,
        recipient = &status.recipient_id,
        status = &status.status
    );
}

/// Main webhook processor
///
/// Rejects envelopes that are not WhatsApp business account events, then
/// handles every message and status independently.
///
/// # Returns
///
/// Handles of the spawned document deliveries. Dropping them detaches the
/// tasks, which keep running.
pub fn process_webhook(
    payload: &WebhookPayload,
    client: &ImplMessagingService,
) -> Result<Vec<JoinHandle<()>>, WebhookError> {
    if payload.object != WHATSAPP_OBJECT {
        return Err(WebhookError::UnknownObject(payload.object.clone()));
    }

    let sends = process_webhook_messages(payload)
        .into_iter()
        .filter_map(|message| handle_user_message(message, client))
        .collect::<Vec<_>>();

    for status in process_webhook_statuses(payload) {
        handle_message_status(status);
    }

    Ok(sends)
}
