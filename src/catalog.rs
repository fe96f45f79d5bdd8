//! Catalog store: the ordered list of sellable products.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use crate::domain::{price_in_range, Product, ProductCreate, ProductId};
use crate::error::{FormField, StoreError};

/// The products the storefront opens with when no config overrides them.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "El DUCE Signature Hoodie", Decimal::from(90), 20),
        Product::new(2, "El DUCE Essential Tee", Decimal::from(45), 35),
        Product::new(3, "El DUCE Street Pants", Decimal::from(110), 15),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    /// `None` once `u64::MAX` has been handed out.
    next_id: Option<u64>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    /// Catalog holding the built-in seed set.
    pub fn seeded() -> Self {
        let products = seed_products();
        let next_id = next_id_after(&products);
        Self { products, next_id }
    }

    /// Builds a catalog from an explicit seed list, keeping its order.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateProduct`] if two seeds share an id, or
    /// [`StoreError::InvalidInput`] for a blank name or out-of-range price.
    pub fn with_products(products: Vec<Product>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.name.trim().is_empty() {
                return Err(StoreError::invalid(FormField::Name, product.name.as_str()));
            }
            if !price_in_range(product.price) {
                return Err(StoreError::invalid(FormField::Price, product.price.to_string()));
            }
            if !seen.insert(product.id) {
                return Err(StoreError::DuplicateProduct(product.id));
            }
        }
        let next_id = next_id_after(&products);
        Ok(Self { products, next_id })
    }

    /// Validates the admin form text and appends a product with a fresh id.
    ///
    /// The catalog is left untouched when validation fails.
    #[instrument(skip(self))]
    pub fn add_product(&mut self, name: &str, price: &str, stock: &str) -> Result<&Product, StoreError> {
        let payload = ProductCreate::parse(name, price, stock)?;
        let id = self.allocate_id()?;
        let product = payload.into_product(id);
        info!(product_id = %product.id, price = %product.price, stock = product.stock, "Product added");
        self.products.push(product);
        Ok(&self.products[self.products.len() - 1])
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // Monotonic, so rapid successive additions never collide.
    fn allocate_id(&mut self) -> Result<ProductId, StoreError> {
        let next = self.next_id.ok_or(StoreError::IdsExhausted)?;
        self.next_id = next.checked_add(1);
        let id = ProductId(next);
        debug!(product_id = %id, "Allocated product id");
        Ok(id)
    }
}

fn next_id_after(products: &[Product]) -> Option<u64> {
    products.iter().map(|p| p.id.0).max().map_or(Some(1), |max| max.checked_add(1))
}
