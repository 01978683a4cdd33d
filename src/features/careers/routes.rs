use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::careers::handler;
use crate::features::careers::service::CareerService;

/// Public career routes
pub fn routes(service: Arc<CareerService>) -> Router {
    Router::new()
        .route(
            "/api/careers",
            get(handler::list_careers).post(handler::create_career),
        )
        .route(
            "/api/careers/{id}",
            get(handler::get_career).delete(handler::delete_career),
        )
        .route(
            "/api/careers/featured/{id}",
            put(handler::set_featured_career),
        )
        .route("/api/careers/publish/{id}", put(handler::publish_career))
        .route(
            "/api/careers/unpublish/{id}",
            put(handler::unpublish_career),
        )
        .with_state(service)
}

/// Career routes behind the bearer-token middleware (update only)
pub fn protected_routes(service: Arc<CareerService>) -> Router {
    Router::new()
        .route("/api/careers/{id}", put(handler::update_career))
        .with_state(service)
}
