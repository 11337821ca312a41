use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::{info, warn};

use crate::{
    error::{AppError, AppResult, ValidationError},
    models::{CreateProduct, Product, SearchParams},
    validation, AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.store.read().await.all().to_vec();
    info!(count = products.len(), "Listed products");
    Json(products)
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Product>> {
    let id: i64 = raw_id.parse().map_err(|_| AppError::InvalidId)?;

    let product = state.store.read().await.by_id(id).cloned().ok_or(AppError::NotFound)?;

    info!(id, "Fetched product");
    Ok(Json(product))
}

// ── Search ────────────────────────────────────────────────────────────────────

pub async fn search_products(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<Product>>> {
    let params = SearchParams::from_pairs(pairs);
    let price_gt = params
        .price_gt
        .as_deref()
        .and_then(validation::parse_price_threshold)
        .ok_or(AppError::InvalidPrice)?;

    let products = state.store.read().await.filter(|p| p.price > price_gt);

    info!(price_gt, count = products.len(), "Searched products");
    Ok(Json(products))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProduct>, JsonRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected product body");
        ValidationError::InvalidBody
    })?;

    let product = state.store.write().await.create(payload).map_err(|reason| {
        warn!(%reason, "Rejected product");
        reason
    })?;

    info!(id = product.id, code_value = %product.code_value, "Created product");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "product created",
            "data": product,
        })),
    ))
}
