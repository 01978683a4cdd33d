use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::roles::handler;
use crate::features::roles::service::RoleService;

/// Create routes for the roles feature
pub fn routes(service: Arc<RoleService>) -> Router {
    Router::new()
        .route(
            "/api/roles",
            get(handler::list_roles).post(handler::create_role),
        )
        .route(
            "/api/roles/{id}",
            get(handler::get_role)
                .put(handler::update_role)
                .delete(handler::delete_role),
        )
        .with_state(service)
}
