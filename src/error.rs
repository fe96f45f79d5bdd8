use std::fmt;

use thiserror::Error;

use crate::domain::ProductId;

/// Admin form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Price,
    Stock,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Name => "name",
            FormField::Price => "price",
            FormField::Stock => "stock",
        };
        f.write_str(label)
    }
}

/// Errors that can occur while applying storefront transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid {field}: {value:?}")]
    InvalidInput { field: FormField, value: String },
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),
    #[error("Insufficient stock for product {id}: requested {requested}, available {available}")]
    InsufficientStock { id: ProductId, requested: u32, available: u32 },
    #[error("Quantity limit for product {id}: requested {requested}, max {max}")]
    QuantityLimit { id: ProductId, requested: u32, max: u32 },
    #[error("Product ids exhausted")]
    IdsExhausted,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Admin panel is hidden")]
    AdminPanelHidden,
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl StoreError {
    pub(crate) fn invalid(field: FormField, value: impl Into<String>) -> Self {
        StoreError::InvalidInput { field, value: value.into() }
    }
}
