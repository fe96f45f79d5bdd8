//! Top-level state container: catalog, cart and the admin-mode flag.
//!
//! Every mutation goes through a named transition on [`Storefront`], either
//! called directly or dispatched as an [`Action`] via [`Storefront::apply`].
//! Views render from a [`StorefrontView`] snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::cart::{Cart, QtyChange, MAX_LINE_QTY};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::domain::{AdminForm, CartLine, Product, ProductId};
use crate::error::StoreError;

/// Whether cart quantities are checked against catalog stock.
///
/// Catalog stock is never decremented by the cart under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockPolicy {
    /// Stock is display-only; any quantity may be added.
    #[default]
    Advisory,
    /// A line may not exceed the product's current catalog stock.
    Enforced,
}

/// User interactions that mutate storefront state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleAdmin,
    AddToCart(ProductId),
    AdjustQty { id: ProductId, delta: i64 },
    RemoveLine(ProductId),
    SubmitProduct(AdminForm),
}

/// What an [`Action`] did - variants match 1:1 with `Action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    AdminToggled(bool),
    AddedToCart { id: ProductId, qty: u32 },
    QtyAdjusted { id: ProductId, change: QtyChange },
    LineRemoved { id: ProductId, change: QtyChange },
    ProductAdded(Product),
}

/// Render snapshot of the whole page state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontView {
    pub products: Vec<Product>,
    pub lines: Vec<CartLine>,
    pub total: Decimal,
    pub item_count: u32,
    pub admin_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Storefront {
    catalog: Catalog,
    cart: Cart,
    admin_mode: bool,
    stock_policy: StockPolicy,
}

impl Storefront {
    pub fn new(catalog: Catalog, stock_policy: StockPolicy) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            admin_mode: false,
            stock_policy,
        }
    }

    /// Builds the container from a config, validating it first.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, StoreError> {
        config
            .validate()
            .map_err(|e| StoreError::InvalidConfig(e.to_string()))?;
        let catalog = Catalog::with_products(config.products.clone())?;
        Ok(Self::new(catalog, config.stock_policy))
    }

    /// Applies one transition.
    pub fn apply(&mut self, action: Action) -> Result<Outcome, StoreError> {
        match action {
            Action::ToggleAdmin => Ok(Outcome::AdminToggled(self.toggle_admin())),
            Action::AddToCart(id) => {
                let qty = self.add_to_cart(id)?;
                Ok(Outcome::AddedToCart { id, qty })
            }
            Action::AdjustQty { id, delta } => {
                let change = self.adjust_qty(id, delta)?;
                Ok(Outcome::QtyAdjusted { id, change })
            }
            Action::RemoveLine(id) => {
                let change = self.remove_line(id);
                Ok(Outcome::LineRemoved { id, change })
            }
            Action::SubmitProduct(form) => self.submit_product(&form).map(Outcome::ProductAdded),
        }
    }

    pub fn toggle_admin(&mut self) -> bool {
        self.admin_mode = !self.admin_mode;
        info!(admin_mode = self.admin_mode, "Admin mode toggled");
        self.admin_mode
    }

    /// Adds one unit of the catalog product `id` to the cart.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<u32, StoreError> {
        let product = self.catalog.get(id).ok_or(StoreError::ProductNotFound(id))?;
        let requested = self.cart.line(id).map_or(0, |l| l.qty).saturating_add(1);
        check_line_limit(id, requested)?;
        if self.stock_policy == StockPolicy::Enforced {
            check_stock(product, requested)?;
        }
        let qty = self.cart.add_to_cart(product);
        debug!(qty, "Added to cart");
        Ok(qty)
    }

    /// Adjusts a cart line by `delta`; unknown ids are ignored.
    #[instrument(skip(self))]
    pub fn adjust_qty(&mut self, id: ProductId, delta: i64) -> Result<QtyChange, StoreError> {
        if delta > 0 {
            if let Some(line) = self.cart.line(id) {
                let requested = u32::try_from(i64::from(line.qty).saturating_add(delta)).unwrap_or(u32::MAX);
                check_line_limit(id, requested)?;
                if self.stock_policy == StockPolicy::Enforced {
                    match self.catalog.get(id) {
                        Some(product) => check_stock(product, requested)?,
                        None => warn!("Cart line has no catalog entry; skipping stock check"),
                    }
                }
            }
        }
        let change = self.cart.update_qty(id, delta);
        debug!(?change, "Quantity adjusted");
        Ok(change)
    }

    #[instrument(skip(self))]
    pub fn remove_line(&mut self, id: ProductId) -> QtyChange {
        self.cart.remove_line(id)
    }

    /// Forwards the admin form to the catalog.
    ///
    /// # Errors
    /// [`StoreError::AdminPanelHidden`] when admin mode is off (the form is
    /// not on screen), or [`StoreError::InvalidInput`] from validation.
    #[instrument(skip(self))]
    pub fn submit_product(&mut self, form: &AdminForm) -> Result<Product, StoreError> {
        if !self.admin_mode {
            warn!("Product submitted while admin panel hidden");
            return Err(StoreError::AdminPanelHidden);
        }
        let product = self.catalog.add_product(&form.name, &form.price, &form.stock)?;
        Ok(product.clone())
    }

    pub fn cart_total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn is_admin(&self) -> bool {
        self.admin_mode
    }

    /// Navbar label for the admin toggle.
    pub fn admin_label(&self) -> &'static str {
        if self.admin_mode {
            "Exit Admin"
        } else {
            "Admin"
        }
    }

    pub fn stock_policy(&self) -> StockPolicy {
        self.stock_policy
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn snapshot(&self) -> StorefrontView {
        StorefrontView {
            products: self.catalog.products().to_vec(),
            lines: self.cart.lines().to_vec(),
            total: self.cart.total(),
            item_count: self.cart.item_count(),
            admin_mode: self.admin_mode,
        }
    }
}

fn check_line_limit(id: ProductId, requested: u32) -> Result<(), StoreError> {
    if requested > MAX_LINE_QTY {
        warn!(product_id = %id, requested, "Line quantity limit reached");
        return Err(StoreError::QuantityLimit { id, requested, max: MAX_LINE_QTY });
    }
    Ok(())
}

fn check_stock(product: &Product, requested: u32) -> Result<(), StoreError> {
    if requested > product.stock {
        warn!(product_id = %product.id, requested, available = product.stock, "Insufficient stock");
        return Err(StoreError::InsufficientStock {
            id: product.id,
            requested,
            available: product.stock,
        });
    }
    Ok(())
}
