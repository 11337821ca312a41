use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::models::Product;

/// Read the startup product list from a JSON array on disk.
///
/// Records are taken as-is; seed data is not run through create validation
/// and missing fields load as zero values.
pub fn load_products(path: impl AsRef<Path>) -> anyhow::Result<Vec<Product>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read products file {}", path.display()))?;
    let products: Vec<Product> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse products file {}", path.display()))?;

    info!(count = products.len(), path = %path.display(), "Loaded products");
    Ok(products)
}
