use crate::webhook::whatsapp::outgoing_schemas::WhatsAppMessageResponse;
use async_trait::async_trait;
use std::sync::Arc;

/// Outbound side of the WhatsApp integration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagingService: Send + Sync {
    /// Delivers the configured clinical history document to `to`.
    ///
    /// A single attempt is made; callers decide what to do with the error.
    async fn send_document(&self, to: &str) -> anyhow::Result<WhatsAppMessageResponse>;
}

pub type ImplMessagingService = Arc<dyn MessagingService>;
