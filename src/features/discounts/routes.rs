use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::discounts::handler;
use crate::features::discounts::service::DiscountService;

/// Create routes for the discounts feature
pub fn routes(service: Arc<DiscountService>) -> Router {
    Router::new()
        .route(
            "/api/discounts",
            get(handler::list_discounts).post(handler::create_discount),
        )
        .route(
            "/api/discounts/{id}",
            get(handler::get_discount)
                .put(handler::update_discount)
                .delete(handler::delete_discount),
        )
        .route(
            "/api/discounts/featured/{id}",
            put(handler::set_featured_discount),
        )
        .route(
            "/api/discounts/publish/{id}",
            put(handler::publish_discount),
        )
        .route(
            "/api/discounts/unpublish/{id}",
            put(handler::unpublish_discount),
        )
        .with_state(service)
}
