use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::articles::handler;
use crate::features::articles::service::ArticleService;

/// Create routes for the articles feature
pub fn routes(service: Arc<ArticleService>) -> Router {
    Router::new()
        .route(
            "/api/articles",
            get(handler::list_articles).post(handler::create_article),
        )
        .route(
            "/api/articles/{id}",
            get(handler::get_article)
                .put(handler::update_article)
                .delete(handler::delete_article),
        )
        .route(
            "/api/articles/featured/{id}",
            put(handler::set_featured_article),
        )
        .route("/api/articles/publish/{id}", put(handler::publish_article))
        .route(
            "/api/articles/unpublish/{id}",
            put(handler::unpublish_article),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use sqlx::postgres::PgPoolOptions;

    fn test_router() -> Router {
        // Lazy pool: never connects unless a query runs, which these tests
        // must not trigger.
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/contenthub_test")
            .unwrap();
        routes(Arc::new(ArticleService::new(pool)))
    }

    #[tokio::test]
    async fn malformed_uuid_is_rejected_before_storage() {
        let server = TestServer::new(test_router()).unwrap();
        let response = server.get("/api/articles/not-a-uuid").await;
        assert_eq!(response.status_code(), 400);
    }

    #[tokio::test]
    async fn non_v4_uuid_is_rejected_before_storage() {
        let server = TestServer::new(test_router()).unwrap();
        let response = server
            .get("/api/articles/00000000-0000-0000-0000-000000000000")
            .await;
        assert_eq!(response.status_code(), 400);
    }
}
