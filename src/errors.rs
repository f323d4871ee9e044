use derive_more::{Display, Error};
use ntex::{http, web};

/// Errors surfaced to the webhook caller.
///
/// Responses carry no body: Meta only looks at the status code.
#[derive(Debug, Display, Error)]
pub enum WebhookError {
    /// Handshake with wrong mode or verify token
    VerificationFailed,
    /// Event envelope whose `object` is not a WhatsApp business account
    #[display("UnknownObject({_0})")]
    UnknownObject(#[error(not(source))] String),
    /// Body that is not JSON, or a WhatsApp envelope with the wrong shape
    #[display("InvalidPayload({_0})")]
    InvalidPayload(#[error(not(source))] String),
    UrlNotFound,
}

impl web::error::WebResponseError for WebhookError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        logfire::warn!("Webhook request rejected: {error}", error = self.to_string());

        web::HttpResponse::build(self.status_code()).finish()
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            WebhookError::VerificationFailed => http::StatusCode::FORBIDDEN,
            WebhookError::UnknownObject(_) => http::StatusCode::NOT_FOUND,
            WebhookError::InvalidPayload(_) => http::StatusCode::BAD_REQUEST,
            WebhookError::UrlNotFound => http::StatusCode::NOT_FOUND,
        }
    }
}
