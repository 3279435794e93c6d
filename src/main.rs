use library_circulation::{
    adapters::mock::{CatalogStore as MockCatalogStore, ReviewSource as MockReviewSource},
    api::{handlers::AppState, router::create_router},
    application::circulation::ServiceDependencies,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_circulation=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize adapters
    let catalog_store = Arc::new(MockCatalogStore::new());
    let review_source = Arc::new(MockReviewSource::new());

    // REVIEW_SEED="isbn=review;isbn=review"
    if let Ok(seed) = std::env::var("REVIEW_SEED") {
        let loaded = review_source.load_seed(&seed);
        tracing::info!("Seeded {} reviews", loaded);
    }

    let reviews_unavailable = std::env::var("REVIEWS_UNAVAILABLE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if reviews_unavailable {
        tracing::warn!("Review source is running in outage mode");
    }
    review_source.set_unavailable(reviews_unavailable);

    // Create service dependencies
    let service_deps = ServiceDependencies {
        catalog_store,
        review_source,
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
