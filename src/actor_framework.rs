//! The storefront actor: owns the [`Storefront`] state and applies requests
//! one at a time, in the order they arrive on its mailbox.

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::clients::StorefrontClient;
use crate::messages::{ServiceResponse, StorefrontRequest};
use crate::storefront::{Action, Outcome, Storefront, StorefrontView};

pub struct StorefrontActor {
    receiver: mpsc::Receiver<StorefrontRequest>,
    state: Storefront,
}

impl StorefrontActor {
    pub fn new(buffer_size: usize, state: Storefront) -> (Self, StorefrontClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        let client = StorefrontClient::new(sender);
        (actor, client)
    }

    /// Main loop. Stops on `Shutdown` or once every client is dropped.
    #[instrument(name = "storefront_actor", skip(self))]
    pub async fn run(mut self) {
        info!(products = self.state.catalog().len(), "Storefront actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StorefrontRequest::Apply { action, respond_to } => {
                    self.handle_apply(action, respond_to);
                }
                StorefrontRequest::Snapshot { respond_to } => {
                    self.handle_snapshot(respond_to);
                }
                StorefrontRequest::CartTotal { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.cart_total()));
                }
                StorefrontRequest::Shutdown => {
                    info!("Storefront actor shutting down");
                    break;
                }
            }
        }

        info!("Storefront actor stopped");
    }

    #[instrument(fields(action = ?action), skip(self, action, respond_to))]
    fn handle_apply(&mut self, action: Action, respond_to: ServiceResponse<Outcome>) {
        debug!("Processing action");
        let result = self.state.apply(action);
        match &result {
            Ok(outcome) => info!(?outcome, total = %self.state.cart_total(), "Action applied"),
            Err(e) => warn!(error = %e, "Action rejected"),
        }
        let _ = respond_to.send(result);
    }

    fn handle_snapshot(&self, respond_to: ServiceResponse<StorefrontView>) {
        let _ = respond_to.send(Ok(self.state.snapshot()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::QtyChange;
    use crate::domain::{AdminForm, ProductId};
    use crate::error::StoreError;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn applies_requests_in_dispatch_order() {
        let (actor, client) = StorefrontActor::new(8, Storefront::default());
        let handle = tokio::spawn(actor.run());

        assert_eq!(client.add_to_cart(ProductId(1)).await, Ok(1));
        assert_eq!(client.add_to_cart(ProductId(1)).await, Ok(2));
        assert_eq!(client.cart_total().await, Ok(Decimal::from(180)));

        assert_eq!(client.adjust_qty(ProductId(1), -1).await, Ok(QtyChange::Updated(1)));
        assert_eq!(client.cart_total().await, Ok(Decimal::from(90)));

        assert_eq!(client.adjust_qty(ProductId(1), -1).await, Ok(QtyChange::Removed));
        let view = client.snapshot().await.unwrap();
        assert!(view.lines.is_empty());
        assert_eq!(view.total, Decimal::ZERO);

        client.shutdown().await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn clones_share_one_ordered_mailbox() {
        let (actor, client) = StorefrontActor::new(4, Storefront::default());
        let handle = tokio::spawn(actor.run());

        let mut tasks = Vec::new();
        for _ in 0..10 {
            let client = client.clone();
            tasks.push(tokio::spawn(async move { client.add_to_cart(ProductId(2)).await }));
        }
        let mut quantities = Vec::new();
        for task in tasks {
            quantities.push(task.await.unwrap().unwrap());
        }
        quantities.sort_unstable();
        assert_eq!(quantities, (1..=10).collect::<Vec<u32>>());
        assert_eq!(client.cart_total().await, Ok(Decimal::from(450)));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn errors_travel_back_to_caller() {
        let (actor, client) = StorefrontActor::new(4, Storefront::default());
        let handle = tokio::spawn(actor.run());

        let form = AdminForm::new("Cap", "25", "10");
        assert_eq!(client.submit_product(form.clone()).await, Err(StoreError::AdminPanelHidden));
        assert_eq!(client.toggle_admin().await, Ok(true));
        let cap = client.submit_product(form).await.unwrap();
        assert_eq!(cap.id, ProductId(4));

        assert_eq!(
            client.add_to_cart(ProductId(99)).await,
            Err(StoreError::ProductNotFound(ProductId(99)))
        );
        assert_eq!(client.remove_line(ProductId(99)).await, Ok(QtyChange::Missing));

        client.shutdown().await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn raw_actions_go_through_the_container() {
        let (actor, client) = StorefrontActor::new(4, Storefront::default());
        let handle = tokio::spawn(actor.run());

        assert_eq!(client.apply(Action::ToggleAdmin).await, Ok(Outcome::AdminToggled(true)));
        assert_eq!(
            client.apply(Action::AddToCart(ProductId(2))).await,
            Ok(Outcome::AddedToCart { id: ProductId(2), qty: 1 })
        );
        assert_eq!(
            client.apply(Action::RemoveLine(ProductId(2))).await,
            Ok(Outcome::LineRemoved { id: ProductId(2), change: QtyChange::Removed })
        );

        client.shutdown().await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn oversized_price_leaves_actor_alive() {
        let (actor, client) = StorefrontActor::new(4, Storefront::default());
        let handle = tokio::spawn(actor.run());

        client.toggle_admin().await.unwrap();
        let err = client
            .submit_product(AdminForm::new("Gold", "79228162514264337593543950335", "10"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput { .. }));

        let max = client
            .submit_product(AdminForm::new("Gold", "1000000000", "10"))
            .await
            .unwrap();
        client.add_to_cart(max.id).await.unwrap();
        client.add_to_cart(max.id).await.unwrap();
        assert_eq!(client.cart_total().await, Ok(Decimal::from(2_000_000_000i64)));
        assert!(client.snapshot().await.is_ok());

        client.shutdown().await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn closed_actor_surfaces_communication_error() {
        let (actor, client) = StorefrontActor::new(1, Storefront::default());
        drop(actor);
        let err = client.toggle_admin().await.unwrap_err();
        assert!(matches!(err, StoreError::ActorCommunication(_)));
    }
}
