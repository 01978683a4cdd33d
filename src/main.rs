mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::articles::{routes as articles_routes, ArticleService};
use crate::features::auth::TokenService;
use crate::features::careers::{routes as careers_routes, CareerService};
use crate::features::countries::{routes as countries_routes, CountryService};
use crate::features::design_categories::{
    routes as design_categories_routes, DesignCategoryService,
};
use crate::features::discounts::{routes as discounts_routes, DiscountService};
use crate::features::newsletters::{routes as newsletters_routes, NewsletterService};
use crate::features::podcasts::{routes as podcasts_routes, PodcastService};
use crate::features::roles::{routes as roles_routes, RoleService};
use crate::features::tutorials::{routes as tutorials_routes, TutorialService};
use crate::features::users::{routes as users_routes, UserService};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations automatically
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Initialize token service for bearer auth
    let token_service = Arc::new(TokenService::new(config.auth.clone()));
    tracing::info!("Token service initialized");

    // Initialize entity services
    let article_service = Arc::new(ArticleService::new(pool.clone()));
    let podcast_service = Arc::new(PodcastService::new(pool.clone()));
    let tutorial_service = Arc::new(TutorialService::new(pool.clone()));
    let discount_service = Arc::new(DiscountService::new(pool.clone()));
    let design_category_service = Arc::new(DesignCategoryService::new(pool.clone()));
    let country_service = Arc::new(CountryService::new(pool.clone()));
    let role_service = Arc::new(RoleService::new(pool.clone()));
    let newsletter_service = Arc::new(NewsletterService::new(pool.clone()));
    let career_service = Arc::new(CareerService::new(pool.clone()));
    let user_service = Arc::new(UserService::new(
        pool.clone(),
        Arc::clone(&token_service),
    ));
    tracing::info!("Entity services initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Build swagger router
    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Protected routes (require bearer token)
    let protected_routes = Router::new()
        .merge(users_routes::protected_routes(Arc::clone(&user_service)))
        .merge(careers_routes::protected_routes(Arc::clone(
            &career_service,
        )))
        .merge(podcasts_routes::protected_routes(Arc::clone(
            &podcast_service,
        )))
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&token_service),
            middleware::auth_middleware,
        ));

    // Simple health check endpoint (no auth required)
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(articles_routes::routes(article_service))
        .merge(podcasts_routes::routes(podcast_service))
        .merge(tutorials_routes::routes(tutorial_service))
        .merge(discounts_routes::routes(discount_service))
        .merge(design_categories_routes::routes(design_category_service))
        .merge(countries_routes::routes(country_service))
        .merge(roles_routes::routes(role_service))
        .merge(newsletters_routes::routes(newsletter_service))
        .merge(careers_routes::routes(career_service))
        .merge(users_routes::routes(user_service));

    let app = Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes)
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
