//! # WhatsApp Webhook Schemas
//!
//! Data structures for the JSON payloads WhatsApp Business API posts to the
//! webhook. Everything except the root `object` is optional on the wire, so
//! containers default to empty and a partial event never fails to parse.

use serde::{Deserialize, Serialize};

/// Root webhook payload from WhatsApp
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookPayload {
    /// The object type, "whatsapp_business_account" for WhatsApp events
    pub object: String,
    /// Array of entry objects containing the actual data
    #[serde(default)]
    pub entry: Vec<Entry>,
}

/// Entry object containing changes and metadata
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Entry {
    /// Business Account ID
    #[serde(default)]
    pub id: String,
    /// Array of changes that occurred
    #[serde(default)]
    pub changes: Vec<Change>,
}

/// Change object containing the actual webhook data
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Change {
    /// The field that changed (e.g., "messages")
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub value: Value,
}

/// Value object containing messages and metadata
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Value {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
    /// Messages received, absent when the change only carries statuses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
    /// Statuses of messages sent by this service
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<Status>,
}

/// Metadata about the WhatsApp Business phone number
#[derive(Debug, Deserialize, Serialize)]
pub struct Metadata {
    #[serde(default)]
    pub display_phone_number: String,
    #[serde(default)]
    pub phone_number_id: String,
}

/// Contact information for the message sender
#[derive(Debug, Deserialize, Serialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    /// WhatsApp ID (phone number)
    #[serde(default)]
    pub wa_id: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
}

/// Message object
#[derive(Debug, Deserialize, Serialize)]
pub struct Message {
    /// Sender's WhatsApp ID (phone number)
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub timestamp: String,
    /// Message type (text, button, interactive, image, ...)
    #[serde(rename = "type", default)]
    pub msg_type: String,
    /// Text message content (if type is "text")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextMessage>,
    /// Quick reply button tapped on a template (if type is "button")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonReply>,
    /// Context (if this is a reply to another message)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

impl Message {
    pub fn is_button(&self) -> bool {
        self.msg_type == "button"
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TextMessage {
    #[serde(default)]
    pub body: String,
}

/// Quick reply button content
#[derive(Debug, Deserialize, Serialize)]
pub struct ButtonReply {
    /// Label displayed on the button
    #[serde(default)]
    pub text: String,
    /// Developer-defined payload attached to the button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

/// Context for reply messages
#[derive(Debug, Deserialize, Serialize)]
pub struct Context {
    #[serde(default)]
    pub from: String,
    /// Message ID being referenced
    #[serde(default)]
    pub id: String,
}

/// Status update for sent messages
#[derive(Debug, Deserialize, Serialize)]
pub struct Status {
    /// Message ID
    #[serde(default)]
    pub id: String,
    /// Status (sent, delivered, read, failed)
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub recipient_id: String,
    /// Present when `status` is "failed"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<StatusError>,
}

impl Status {
    pub fn is_failed(&self) -> bool {
        self.status == "failed"
    }

    /// "title (code)" of every reported error, `None` unless the status is failed
    pub fn failure_reasons(&self) -> Option<String> {
        if !self.is_failed() {
            return None;
        }

        Some(
            self.errors
                .iter()
                .map(|e| format!("{} ({})", e.title, e.code))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StatusError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub title: String,
}
