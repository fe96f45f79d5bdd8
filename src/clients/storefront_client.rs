use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::cart::QtyChange;
use crate::domain::{AdminForm, Product, ProductId};
use crate::error::StoreError;
use crate::messages::StorefrontRequest;
use crate::storefront::{Action, Outcome, StorefrontView};

/// Cloneable handle to the storefront actor.
///
/// The typed helpers wrap [`StorefrontClient::apply`] and unpack the
/// matching [`Outcome`].
#[derive(Clone)]
pub struct StorefrontClient {
    sender: mpsc::Sender<StorefrontRequest>,
}

impl StorefrontClient {
    pub fn new(sender: mpsc::Sender<StorefrontRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn toggle_admin(&self) -> Result<bool, StoreError> {
        match self.apply(Action::ToggleAdmin).await? {
            Outcome::AdminToggled(admin_mode) => Ok(admin_mode),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, id: ProductId) -> Result<u32, StoreError> {
        match self.apply(Action::AddToCart(id)).await? {
            Outcome::AddedToCart { qty, .. } => Ok(qty),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn adjust_qty(&self, id: ProductId, delta: i64) -> Result<QtyChange, StoreError> {
        match self.apply(Action::AdjustQty { id, delta }).await? {
            Outcome::QtyAdjusted { change, .. } => Ok(change),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_line(&self, id: ProductId) -> Result<QtyChange, StoreError> {
        match self.apply(Action::RemoveLine(id)).await? {
            Outcome::LineRemoved { change, .. } => Ok(change),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn submit_product(&self, form: AdminForm) -> Result<Product, StoreError> {
        match self.apply(Action::SubmitProduct(form)).await? {
            Outcome::ProductAdded(product) => Ok(product),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), StoreError> {
        debug!("Sending shutdown");
        self.sender
            .send(StorefrontRequest::Shutdown)
            .await
            .map_err(|_| StoreError::ActorCommunication("Actor closed".to_string()))
    }
}

fn unexpected(outcome: Outcome) -> StoreError {
    StoreError::ActorCommunication(format!("Unexpected outcome: {:?}", outcome))
}

client_method!(StorefrontClient => fn apply(action: Action) -> Outcome as StorefrontRequest::Apply);
client_method!(StorefrontClient => fn snapshot() -> StorefrontView as StorefrontRequest::Snapshot);
client_method!(StorefrontClient => fn cart_total() -> Decimal as StorefrontRequest::CartTotal);
