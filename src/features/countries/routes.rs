use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::countries::handler;
use crate::features::countries::service::CountryService;

/// Create routes for the countries feature
pub fn routes(service: Arc<CountryService>) -> Router {
    Router::new()
        .route(
            "/api/countries",
            get(handler::list_countries).post(handler::create_country),
        )
        .route(
            "/api/countries/{id}",
            get(handler::get_country)
                .put(handler::update_country)
                .delete(handler::delete_country),
        )
        .with_state(service)
}
