use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::{Product, ProductId};

/// One aggregated cart entry: a copy of the product taken when it was first
/// added, plus the selected quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
    /// Always >= 1 while the line is in the cart.
    pub qty: u32,
}

impl CartLine {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            stock: product.stock,
            qty: 1,
        }
    }

    /// `price * qty`, pinned at `Decimal::MAX` rather than overflowing.
    pub fn subtotal(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.qty))
    }
}
