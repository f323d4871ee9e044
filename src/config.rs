//! Application configuration management with security considerations.
//!
//! All values come from environment variables and are loaded once at start-up
//! by `main`. The resulting [`AppConfig`] is handed to the components that need
//! it; nothing reads the environment after that.
//!
//! # Security Notes
//! - Sensitive fields are clearly marked and should never be logged
//! - Production environments should use secure secret management systems

use envconfig::Envconfig;
use std::time::Duration;

/// Application configuration with security-aware field management.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(default = "3000")]
    pub web_server_port: u16,

    /// WhatsApp Business phone number ID used as sender (SEMI-SENSITIVE)
    /// Security: Restrict access, don't log in production
    pub phone_number_id: u64,

    /// 🔒 SENSITIVE: WhatsApp Business bearer token for the send API
    /// Security: Store in secure secret management system
    pub token: String,

    /// 🔒 SENSITIVE: Secret echoed by Meta during the webhook handshake
    #[envconfig(default = "mi_token_secreto")]
    pub verify_token: String,

    /// Graph API base URL, without trailing slash (NON-SENSITIVE)
    #[envconfig(default = "https://graph.facebook.com/v20.0")]
    pub whatsapp_api_base: String,

    /// Timeout applied to every outbound WhatsApp API request, in seconds
    #[envconfig(default = "30")]
    pub whatsapp_timeout_secs: u64,

    /// Public URL of the document delivered after an accepted consent
    #[envconfig(default = "https://tuservidor.com/historia.pdf")]
    pub document_link: String,

    /// Filename shown to the patient for the delivered document
    #[envconfig(default = "historia_clinica.pdf")]
    pub document_filename: String,

    /// Optional caption attached to the delivered document
    pub document_caption: Option<String>,
}

impl AppConfig {
    /// Constructs the WhatsApp Business API endpoint for sending messages
    pub fn whatsapp_send_msg_endpoint(&self) -> String {
        format!(
            "{base}/{id}/messages",
            base = self.whatsapp_api_base.trim_end_matches('/'),
            id = self.phone_number_id
        )
    }

    pub fn whatsapp_timeout(&self) -> Duration {
        Duration::from_secs(self.whatsapp_timeout_secs)
    }
}

#[cfg(test)]
pub fn test_config(api_base: &str) -> AppConfig {
    let vars = std::collections::HashMap::from([
        ("PHONE_NUMBER_ID".to_string(), "123456".to_string()),
        ("TOKEN".to_string(), "test-token".to_string()),
        ("VERIFY_TOKEN".to_string(), "test-verify".to_string()),
        ("WHATSAPP_API_BASE".to_string(), api_base.to_string()),
    ]);

    AppConfig::init_from_hashmap(&vars).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_applied() {
        let vars = HashMap::from([
            ("PHONE_NUMBER_ID".to_string(), "987".to_string()),
            ("TOKEN".to_string(), "secret".to_string()),
        ]);

        let config = AppConfig::init_from_hashmap(&vars).unwrap();

        assert_eq!(config.web_server_port, 3000);
        assert_eq!(config.verify_token, "mi_token_secreto");
        assert_eq!(config.document_link, "https://tuservidor.com/historia.pdf");
        assert_eq!(config.document_filename, "historia_clinica.pdf");
        assert!(config.document_caption.is_none());
        assert_eq!(config.whatsapp_timeout(), Duration::from_secs(30));
        assert_eq!(config.env, "local");
        assert_eq!(
            config.whatsapp_send_msg_endpoint(),
            "https://graph.facebook.com/v20.0/987/messages"
        );
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let vars = HashMap::from([("PHONE_NUMBER_ID".to_string(), "987".to_string())]);
        assert!(AppConfig::init_from_hashmap(&vars).is_err());

        let vars = HashMap::from([
            ("PHONE_NUMBER_ID".to_string(), "not-a-number".to_string()),
            ("TOKEN".to_string(), "secret".to_string()),
        ]);
        assert!(AppConfig::init_from_hashmap(&vars).is_err());
    }

    #[test]
    fn test_send_endpoint_trims_trailing_slash() {
        let config = test_config("http://127.0.0.1:9000/");
        assert_eq!(
            config.whatsapp_send_msg_endpoint(),
            "http://127.0.0.1:9000/123456/messages"
        );
    }
}
