use tracing::{error, info, instrument};

use crate::actor_framework::StorefrontActor;
use crate::clients::StorefrontClient;
use crate::config::StorefrontConfig;
use crate::error::StoreError;
use crate::storefront::Storefront;

/// Starts the storefront actor and keeps its task handle for shutdown.
///
/// Must be created inside a Tokio runtime.
pub struct StorefrontSystem {
    pub client: StorefrontClient,
    pub currency: String,
    handle: tokio::task::JoinHandle<()>,
}

impl StorefrontSystem {
    /// Validates `config` and spawns the actor.
    ///
    /// # Errors
    /// [`StoreError::InvalidConfig`] or a seed error; nothing is spawned.
    #[instrument(name = "storefront_system", skip(config))]
    pub fn new(config: &StorefrontConfig) -> Result<Self, StoreError> {
        info!("Starting storefront system");

        let state = Storefront::from_config(config)?;
        let (actor, client) = StorefrontActor::new(config.mailbox_size, state);
        let handle = tokio::spawn(actor.run());

        info!(stock_policy = ?config.stock_policy, "Storefront system started");
        Ok(Self {
            client,
            currency: config.currency.clone(),
            handle,
        })
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), StoreError> {
        info!("Shutting down storefront system");

        // Clones held elsewhere may still be alive, so ask explicitly.
        self.client.shutdown().await?;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Storefront actor task failed");
            return Err(StoreError::ActorCommunication(format!("Actor task failed: {}", e)));
        }

        info!("Storefront system shutdown complete");
        Ok(())
    }
}
