use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::ValidationError;
use crate::models::{CreateProduct, Product};
use crate::validation;

/// Store handle shared across requests. Creates take the write lock for the
/// whole read-length → validate → append sequence.
pub type SharedStore = Arc<RwLock<ProductStore>>;

/// In-memory, insertion-ordered product list. Only ever appended to.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn by_id(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<Product>
    where
        P: Fn(&Product) -> bool,
    {
        self.products.iter().filter(|p| predicate(p)).cloned().collect()
    }

    /// Caller is responsible for id assignment and code uniqueness.
    pub fn append(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Ids are the current length plus one; there is no reuse or gap filling.
    pub fn next_id(&self) -> i64 {
        self.len() as i64 + 1
    }

    /// Validate `payload` and append it as a new product.
    pub fn create(&mut self, payload: CreateProduct) -> Result<Product, ValidationError> {
        let id = self.next_id();

        validation::validate_expiration(&payload.expiration)?;

        if !validation::validate_unique_code(&payload.code_value, &self.products) {
            return Err(ValidationError::CodeValueUsed);
        }

        let product = payload.into_product(id);
        self.append(product.clone());
        Ok(product)
    }
}
