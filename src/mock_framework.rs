//! # Mock Framework
//!
//! Utilities for testing code that talks to the storefront actor without
//! spinning one up.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! mailbox, then use the `expect_*` helpers to pull the next request and
//! answer it by hand.

use rust_decimal::Decimal;
use tokio::sync::mpsc;

use crate::clients::StorefrontClient;
use crate::messages::{ServiceResponse, StorefrontRequest};
use crate::storefront::{Action, Outcome, StorefrontView};

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client(buffer_size: usize) -> (StorefrontClient, mpsc::Receiver<StorefrontRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StorefrontClient::new(sender), receiver)
}

/// Next message must be an Apply request.
pub async fn expect_apply(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<(Action, ServiceResponse<Outcome>)> {
    match receiver.recv().await {
        Some(StorefrontRequest::Apply { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

pub async fn expect_snapshot(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<ServiceResponse<StorefrontView>> {
    match receiver.recv().await {
        Some(StorefrontRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

pub async fn expect_cart_total(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<ServiceResponse<Decimal>> {
    match receiver.recv().await {
        Some(StorefrontRequest::CartTotal { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::QtyChange;
    use crate::domain::{AdminForm, ProductId};
    use crate::error::{FormField, StoreError};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.add_to_cart(ProductId(1)).await });

        let (action, responder) = expect_apply(&mut receiver).await.expect("Expected Apply request");
        assert_eq!(action, Action::AddToCart(ProductId(1)));
        responder.send(Ok(Outcome::AddedToCart { id: ProductId(1), qty: 3 })).unwrap();

        assert_eq!(task.await.unwrap(), Ok(3));
    }

    #[tokio::test]
    async fn test_mock_forwards_form_and_error() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.submit_product(AdminForm::new("Cap", "abc", "10")).await });

        let (action, responder) = expect_apply(&mut receiver).await.expect("Expected Apply request");
        let Action::SubmitProduct(form) = action else {
            panic!("Unexpected action: {:?}", action);
        };
        assert_eq!(form.price, "abc");
        let err = StoreError::InvalidInput { field: FormField::Price, value: form.price.clone() };
        responder.send(Err(err.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Err(err));
    }

    #[tokio::test]
    async fn test_mismatched_outcome_is_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.remove_line(ProductId(2)).await });

        let (_, responder) = expect_apply(&mut receiver).await.expect("Expected Apply request");
        responder.send(Ok(Outcome::AdminToggled(true))).unwrap();

        assert!(matches!(task.await.unwrap(), Err(StoreError::ActorCommunication(_))));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.adjust_qty(ProductId(2), -1).await });

        let (action, responder) = expect_apply(&mut receiver).await.expect("Expected Apply request");
        assert_eq!(action, Action::AdjustQty { id: ProductId(2), delta: -1 });
        drop(responder);

        assert!(matches!(task.await.unwrap(), Err(StoreError::ActorCommunication(_))));
    }

    #[tokio::test]
    async fn test_remove_line_unpacks_change() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.remove_line(ProductId(3)).await });

        let (action, responder) = expect_apply(&mut receiver).await.expect("Expected Apply request");
        assert_eq!(action, Action::RemoveLine(ProductId(3)));
        responder
            .send(Ok(Outcome::LineRemoved { id: ProductId(3), change: QtyChange::Missing }))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(QtyChange::Missing));
    }
}
