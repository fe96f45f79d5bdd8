use rust_decimal::Decimal;
use tokio::sync::oneshot;

use crate::error::StoreError;
use crate::storefront::{Action, Outcome, StorefrontView};

/// Generic type aliases for service communication
pub type ServiceResult<T> = std::result::Result<T, StoreError>;
pub type ServiceResponse<T> = oneshot::Sender<ServiceResult<T>>;

/// Typed messages for the storefront actor. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum StorefrontRequest {
    /// Every state mutation travels as an [`Action`].
    Apply {
        action: Action,
        respond_to: ServiceResponse<Outcome>,
    },
    Snapshot {
        respond_to: ServiceResponse<StorefrontView>,
    },
    CartTotal {
        respond_to: ServiceResponse<Decimal>,
    },
    Shutdown,
}
