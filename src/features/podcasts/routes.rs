use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::podcasts::handler;
use crate::features::podcasts::service::PodcastService;

/// Public podcast routes
pub fn routes(service: Arc<PodcastService>) -> Router {
    Router::new()
        .route(
            "/api/podcasts",
            get(handler::list_podcasts).post(handler::create_podcast),
        )
        .route(
            "/api/podcasts/{id}",
            get(handler::get_podcast).delete(handler::delete_podcast),
        )
        .route(
            "/api/podcasts/featured/{id}",
            put(handler::set_featured_podcast),
        )
        .route("/api/podcasts/publish/{id}", put(handler::publish_podcast))
        .route(
            "/api/podcasts/unpublish/{id}",
            put(handler::unpublish_podcast),
        )
        .with_state(service)
}

/// Podcast routes behind the bearer-token middleware (update only)
pub fn protected_routes(service: Arc<PodcastService>) -> Router {
    Router::new()
        .route("/api/podcasts/{id}", put(handler::update_podcast))
        .with_state(service)
}
