use crate::errors;
use ntex::web;

/// Configures webhook routes for external integrations.
///
/// These routes are public endpoints that don't require authentication.
///
/// # Routes
/// - `GET /webhook` - WhatsApp webhook verification
/// - `POST /webhook` - WhatsApp webhook receiver
pub fn whatsapp(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/webhook")
            .service((super::whatsapp::verify, super::whatsapp::receive)),
    );
}

/// Return a [UrlNotFound](errors::WebhookError::UrlNotFound) error for urls not defined
pub async fn serve_not_found() -> Result<web::HttpResponse, web::Error> {
    Err(errors::WebhookError::UrlNotFound.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config, services::MockMessagingService, webhook::AppState};
    use ntex::{http::StatusCode, web::test};
    use std::sync::Arc;

    #[ntex::test]
    async fn test_unknown_route_not_found() {
        let state = AppState::new(
            &config::test_config("http://127.0.0.1:9"),
            Arc::new(MockMessagingService::new()),
        );
        let app = test::init_service(
            web::App::new()
                .state(state)
                .configure(whatsapp)
                .default_service(web::route().to(serve_not_found)),
        )
        .await;

        let req = test::TestRequest::with_uri("/other").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
