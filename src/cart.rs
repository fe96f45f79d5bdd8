//! Cart store: one line per product id, quantities always >= 1.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{CartLine, Product, ProductId};

/// Most units a single line can hold.
pub const MAX_LINE_QTY: u32 = 10_000;

/// Result of a quantity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QtyChange {
    /// The line remains with the new quantity.
    Updated(u32),
    /// The quantity dropped to zero or below and the line is gone.
    Removed,
    /// No line with that id; nothing changed.
    Missing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`, returning the line's new quantity.
    ///
    /// A new line copies the product's fields as they are now; an existing
    /// line only has its quantity bumped, up to [`MAX_LINE_QTY`].
    pub fn add_to_cart(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.qty = line.qty.saturating_add(1).min(MAX_LINE_QTY);
            debug!(product_id = %product.id, qty = line.qty, "Incremented cart line");
            return line.qty;
        }
        self.lines.push(CartLine::from_product(product));
        debug!(product_id = %product.id, "Created cart line");
        1
    }

    /// Adds `delta` to the line's quantity, dropping the line when the
    /// result is not positive and clamping it at [`MAX_LINE_QTY`].
    pub fn update_qty(&mut self, id: ProductId, delta: i64) -> QtyChange {
        let Some(pos) = self.lines.iter().position(|l| l.id == id) else {
            return QtyChange::Missing;
        };

        let next = i64::from(self.lines[pos].qty).saturating_add(delta);
        if next <= 0 {
            self.lines.remove(pos);
            debug!(product_id = %id, "Removed cart line");
            return QtyChange::Removed;
        }

        let qty = u32::try_from(next).unwrap_or(u32::MAX).min(MAX_LINE_QTY);
        self.lines[pos].qty = qty;
        QtyChange::Updated(qty)
    }

    /// Removes the whole line through the same path as decrementing to zero.
    pub fn remove_line(&mut self, id: ProductId) -> QtyChange {
        let Some(qty) = self.line(id).map(|l| i64::from(l.qty)) else {
            return QtyChange::Missing;
        };
        self.update_qty(id, -qty)
    }

    /// Sum of `price * qty`, recomputed on every call.
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line.subtotal()))
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().fold(0u32, |acc, l| acc.saturating_add(l.qty))
    }
}
