//! WhatsApp webhook integration module
//!
//! This module provides webhook handling for WhatsApp Business API integration:
//! consent button replies sent by patients and delivery of the clinical
//! history document when they accept.
//!
//! ## Submodules
//!
//! - [`handler`] - Business logic for processing WhatsApp webhook events
//! - [`routes`] - HTTP endpoint handlers for WhatsApp webhooks
//! - [`schemas`] - Incoming webhook payloads
//! - [`outgoing_schemas`] - Outgoing messages and send API responses
//! - [`client`] - WhatsApp API client for sending messages

pub mod client;
pub mod handler;
pub mod outgoing_schemas;
pub mod routes;
pub mod schemas;

// Re-export commonly used items for convenience
pub use routes::{receive, verify};
