//! # HC Consent Webhook
//!
//! Entry point of the WhatsApp webhook that delivers the clinical history
//! document to patients who accept it. Loads configuration, sets up logging
//! and runs the web server.

pub mod config;
pub mod errors;
pub mod services;
pub mod webhook;

use anyhow::Context;
use envconfig::Envconfig;
use ntex::web;
use std::sync::Arc;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    // Initialize configuration
    let app_config =
        config::AppConfig::init_from_env().context("failed to load app config from environment")?;

    // Initialize logging, exported only when LOGFIRE_TOKEN is set
    let shutdown_handler = logfire::configure()
        .install_panic_handler()
        .send_to_logfire(logfire::config::SendToLogfire::IfTokenPresent)
        .finish()?;

    let whatsapp_client = webhook::whatsapp::client::WhatsAppClient::new(&app_config)?;
    let app_state = webhook::AppState::new(&app_config, Arc::new(whatsapp_client));

    logfire::info!(
        "Webhook server listening on http://0.0.0.0:{port}/webhook (env={env})",
        port = app_config.web_server_port.to_string(),
        env = &app_config.env
    );

    run_server(app_config.web_server_port, app_state).await?;

    shutdown_handler.shutdown()?;

    Ok(())
}

/// Configures and starts the web server
async fn run_server(port: u16, app_state: webhook::AppState) -> anyhow::Result<()> {
    web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .state(app_state.clone())
            .configure(webhook::routes::whatsapp)
            .default_service(web::route().to(webhook::routes::serve_not_found))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
