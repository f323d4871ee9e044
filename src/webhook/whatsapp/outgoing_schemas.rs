//! # WhatsApp Outgoing Message Schemas
//!
//! Data structures for sending messages to WhatsApp Business API.

use serde::{Deserialize, Serialize};

/// Document message to send to WhatsApp
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingDocumentMessage {
    /// Messaging product, always "whatsapp"
    pub messaging_product: String,
    /// Recipient's WhatsApp ID (phone number)
    pub to: String,
    /// Message type, "document"
    #[serde(rename = "type")]
    pub msg_type: String,
    pub document: DocumentContent,
}

impl OutgoingDocumentMessage {
    /// Creates a new document message with link
    pub fn new_with_link(to: String, link: String, filename: String) -> Self {
        Self {
            messaging_product: "whatsapp".to_string(),
            to,
            msg_type: "document".to_string(),
            document: DocumentContent {
                link,
                caption: None,
                filename: Some(filename),
            },
        }
    }

    pub fn with_caption(mut self, caption: Option<String>) -> Self {
        self.document.caption = caption;
        self
    }
}

/// Document content
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentContent {
    /// Public link WhatsApp downloads the document from
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Response from WhatsApp API when sending a message
#[derive(Debug, Serialize, Deserialize)]
pub struct WhatsAppMessageResponse {
    pub messaging_product: String,
    #[serde(default)]
    pub contacts: Vec<WhatsAppContact>,
    #[serde(default)]
    pub messages: Vec<WhatsAppMessageStatus>,
}

impl WhatsAppMessageResponse {
    /// Comma separated ids of the messages accepted by WhatsApp
    pub fn message_ids(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.id.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Contact information in response
#[derive(Debug, Serialize, Deserialize)]
pub struct WhatsAppContact {
    pub wa_id: String,
    pub input: String,
}

/// Message status in response
#[derive(Debug, Serialize, Deserialize)]
pub struct WhatsAppMessageStatus {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_message_wire_format() {
        let message = OutgoingDocumentMessage::new_with_link(
            "573001112233".into(),
            "https://tuservidor.com/historia.pdf".into(),
            "historia_clinica.pdf".into(),
        );

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "messaging_product": "whatsapp",
                "to": "573001112233",
                "type": "document",
                "document": {
                    "link": "https://tuservidor.com/historia.pdf",
                    "filename": "historia_clinica.pdf"
                }
            })
        );
    }

    #[test]
    fn test_caption_serialized_when_present() {
        let message = OutgoingDocumentMessage::new_with_link(
            "573001112233".into(),
            "https://tuservidor.com/historia.pdf".into(),
            "historia_clinica.pdf".into(),
        )
        .with_caption(Some("Documentación clínica".into()));

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["document"]["caption"], "Documentación clínica");
    }

    #[test]
    fn test_message_ids() {
        let response: WhatsAppMessageResponse = serde_json::from_value(json!({
            "messaging_product": "whatsapp",
            "contacts": [{"input": "573001112233", "wa_id": "573001112233"}],
            "messages": [{"id": "wamid.A"}, {"id": "wamid.B"}]
        }))
        .unwrap();

        assert_eq!(response.message_ids(), "wamid.A,wamid.B");
    }
}
