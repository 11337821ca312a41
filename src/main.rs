use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

mod config;
mod error;
mod handlers;
mod models;
mod seed;
mod store;
mod validation;

use crate::config::Config;
use crate::store::{ProductStore, SharedStore};

/// Shared application state, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,products_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    // A missing or malformed seed file aborts before the listener is bound.
    let products = seed::load_products(&config.products_file)?;

    let store = ProductStore::from_products(products);
    if store.is_empty() {
        warn!(path = %config.products_file, "Products file is empty, starting with no products");
    }

    let state = AppState {
        store: store.into_shared(),
    };

    let app = build_router(state);

    let addr = config.addr();
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))

        // ── Products ────────────────────────────────────────────────────────
        .route(
            "/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route("/products/search", get(handlers::products::search_products))
        .route("/products/:id", get(handlers::products::get_product))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
