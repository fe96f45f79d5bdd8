use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{FormField, StoreError};

/// Largest accepted unit price. Keeps `price * qty` and cart sums well
/// inside `Decimal` range.
pub const MAX_PRICE_UNITS: i64 = 1_000_000_000;

/// Whether `price` is a sellable amount: non-negative and at most
/// [`MAX_PRICE_UNITS`].
pub fn price_in_range(price: Decimal) -> bool {
    price >= Decimal::ZERO && price <= Decimal::from(MAX_PRICE_UNITS)
}

/// Catalog identifier. Seed products use small sequential values and
/// admin-added products continue the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a sellable product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    /// Advisory only; cart operations never decrement it.
    pub stock: u32,
}

impl Product {
    pub fn new(id: u64, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            stock,
        }
    }
}

/// The three free-text fields collected by the admin panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminForm {
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl AdminForm {
    pub fn new(name: impl Into<String>, price: impl Into<String>, stock: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            stock: stock.into(),
        }
    }
}

/// Validated payload for creating a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

impl ProductCreate {
    /// Parses raw form text.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidInput`] naming the first offending field:
    /// a blank name, a price that is not a decimal in `0..=MAX_PRICE_UNITS`,
    /// or a stock that is not a non-negative integer.
    pub fn parse(name: &str, price: &str, stock: &str) -> Result<Self, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::invalid(FormField::Name, name));
        }

        let price = Decimal::from_str(price.trim())
            .ok()
            .filter(|p| price_in_range(*p))
            .ok_or_else(|| StoreError::invalid(FormField::Price, price))?;
        // "-0" parses with the sign bit set.
        let price = if price.is_zero() { Decimal::ZERO } else { price };

        let stock = stock
            .trim()
            .parse::<u32>()
            .map_err(|_| StoreError::invalid(FormField::Stock, stock))?;

        Ok(Self {
            name: name.to_string(),
            price,
            stock,
        })
    }

    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
        }
    }
}

impl TryFrom<&AdminForm> for ProductCreate {
    type Error = StoreError;

    fn try_from(form: &AdminForm) -> Result<Self, Self::Error> {
        Self::parse(&form.name, &form.price, &form.stock)
    }
}
