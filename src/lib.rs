//! # Storefront
//!
//! In-memory state model for a single-page shop: a product catalog, a cart
//! and an admin-mode toggle for adding products.
//!
//! - **Domain types** - [`Product`], [`CartLine`], [`AdminForm`]
//! - **Stores** - [`Catalog`] and [`Cart`], composed by the [`Storefront`]
//!   container whose transitions are the only way state changes
//! - **Actor** - [`StorefrontActor`] applies requests in mailbox order;
//!   [`StorefrontClient`] is its cloneable handle
//! - **System** - [`StorefrontSystem`] starts and stops the actor,
//!   [`setup_tracing`] configures logging
//!
//! ```no_run
//! # async fn demo() -> Result<(), storefront::StoreError> {
//! use storefront::{ProductId, StorefrontConfig, StorefrontSystem};
//!
//! let system = StorefrontSystem::new(&StorefrontConfig::default())?;
//! system.client.add_to_cart(ProductId(1)).await?;
//! let _total = system.client.cart_total().await?;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod cart;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod messages;
pub mod render;
pub mod storefront;

#[cfg(test)]
mod mock_framework;

pub use actor_framework::StorefrontActor;
pub use app_system::{setup_tracing, StorefrontSystem};
pub use cart::{Cart, QtyChange};
pub use catalog::Catalog;
pub use clients::StorefrontClient;
pub use config::{ConfigError, StorefrontConfig};
pub use domain::{AdminForm, CartLine, Product, ProductCreate, ProductId};
pub use error::{FormField, StoreError};
pub use render::StorefrontPage;
pub use storefront::{Action, Outcome, StockPolicy, Storefront, StorefrontView};
