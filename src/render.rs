//! Plain-text rendering of a [`StorefrontView`].

use std::fmt;

use crate::storefront::StorefrontView;

pub const CHECKOUT_LABEL: &str = "Checkout (Stripe Ready)";
pub const EMPTY_CART: &str = "Your cart is empty.";

/// Display adapter that lays a snapshot out as the shop page.
pub struct StorefrontPage<'a> {
    view: &'a StorefrontView,
    currency: &'a str,
}

impl<'a> StorefrontPage<'a> {
    pub fn new(view: &'a StorefrontView, currency: &'a str) -> Self {
        Self { view, currency }
    }
}

impl fmt::Display for StorefrontPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let currency = self.currency;

        writeln!(f, "Shop")?;
        for product in &self.view.products {
            writeln!(
                f,
                "  [{}] {} - ${} {} (Stock: {})",
                product.id, product.name, product.price, currency, product.stock
            )?;
        }

        writeln!(f, "Cart")?;
        if self.view.lines.is_empty() {
            writeln!(f, "  {}", EMPTY_CART)?;
        } else {
            for line in &self.view.lines {
                writeln!(f, "  {} x{}", line.name, line.qty)?;
            }
            writeln!(f, "  Total: ${} {}", self.view.total, currency)?;
            writeln!(f, "  {}", CHECKOUT_LABEL)?;
        }

        if self.view.admin_mode {
            writeln!(f, "Admin Dashboard")?;
            writeln!(f, "  Product Name | Price | Stock")?;
        }
        Ok(())
    }
}
