use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::users::handler;
use crate::features::users::service::UserService;

/// Public user routes (registration only)
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users", post(handler::register_user))
        .with_state(service)
}

/// User routes behind the bearer-token middleware
pub fn protected_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users", get(handler::list_users))
        .route(
            "/api/users/{id}",
            get(handler::get_user)
                .put(handler::update_user)
                .delete(handler::delete_user),
        )
        .with_state(service)
}
