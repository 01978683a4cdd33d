use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::design_categories::handler;
use crate::features::design_categories::service::DesignCategoryService;

/// Create routes for the design categories feature
pub fn routes(service: Arc<DesignCategoryService>) -> Router {
    Router::new()
        .route(
            "/api/design-categories",
            get(handler::list_design_categories).post(handler::create_design_category),
        )
        .route(
            "/api/design-categories/{id}",
            get(handler::get_design_category)
                .put(handler::update_design_category)
                .delete(handler::delete_design_category),
        )
        .route(
            "/api/design-categories/publish/{id}",
            put(handler::publish_design_category),
        )
        .route(
            "/api/design-categories/unpublish/{id}",
            put(handler::unpublish_design_category),
        )
        .with_state(service)
}
