//! Webhook handlers for external integrations
//!
//! ## Modules
//!
//! - [`whatsapp`] - WhatsApp Business API webhook handlers
//! - [`routes`] - Route registration for the webhook endpoints

pub mod routes;
pub mod whatsapp;

use crate::{config::AppConfig, services::ImplMessagingService};

/// State shared by the webhook handlers
#[derive(Clone)]
pub struct AppState {
    /// 🔒 SENSITIVE: expected `hub.verify_token` of the subscription handshake
    pub verify_token: String,
    pub messaging_service: ImplMessagingService,
}

impl AppState {
    pub fn new(app_config: &AppConfig, messaging_service: ImplMessagingService) -> Self {
        Self {
            verify_token: app_config.verify_token.clone(),
            messaging_service,
        }
    }
}
