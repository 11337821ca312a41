use serde::{Deserialize, Deserializer, Serialize};

/// Core product record. The same shape is read from the seed file and
/// written back out by every endpoint that returns products.
///
/// Missing or `null` fields in the seed file load as their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
    /// Unique across the store.
    #[serde(deserialize_with = "null_as_default")]
    pub code_value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_published: bool,
    /// `DD/MM/YYYY`
    #[serde(deserialize_with = "null_as_default")]
    pub expiration: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of `POST /products`. Missing or `null` fields fall back to their zero
/// value; `id` is accepted but never used, the store assigns its own.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateProduct {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub code_value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_published: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub expiration: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
}

impl CreateProduct {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            is_published: self.is_published,
            expiration: self.expiration,
            price: self.price,
        }
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Default, PartialEq)]
pub struct SearchParams {
    pub price_gt: Option<String>,
}

impl SearchParams {
    /// Build from raw query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let price_gt = pairs
            .into_iter()
            .find(|(key, _)| key == "priceGt")
            .map(|(_, value)| value);
        Self { price_gt }
    }
}
