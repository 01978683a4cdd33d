use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::newsletters::handler;
use crate::features::newsletters::service::NewsletterService;

/// Create routes for the newsletters feature
pub fn routes(service: Arc<NewsletterService>) -> Router {
    Router::new()
        .route(
            "/api/newsletters",
            get(handler::list_newsletters).post(handler::create_newsletter),
        )
        .route(
            "/api/newsletters/{id}",
            get(handler::get_newsletter)
                .put(handler::update_newsletter)
                .delete(handler::delete_newsletter),
        )
        .with_state(service)
}
