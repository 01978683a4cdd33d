use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::tutorials::handler;
use crate::features::tutorials::service::TutorialService;

/// Create routes for the tutorials feature
pub fn routes(service: Arc<TutorialService>) -> Router {
    Router::new()
        .route(
            "/api/tutorials",
            get(handler::list_tutorials).post(handler::create_tutorial),
        )
        .route(
            "/api/tutorials/{id}",
            get(handler::get_tutorial)
                .put(handler::update_tutorial)
                .delete(handler::delete_tutorial),
        )
        .route(
            "/api/tutorials/featured/{id}",
            put(handler::set_featured_tutorial),
        )
        .route(
            "/api/tutorials/publish/{id}",
            put(handler::publish_tutorial),
        )
        .route(
            "/api/tutorials/unpublish/{id}",
            put(handler::unpublish_tutorial),
        )
        .with_state(service)
}
