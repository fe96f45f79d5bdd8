#[macro_use]
mod macros;
mod storefront_client;

pub use storefront_client::*;
