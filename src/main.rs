use std::path::PathBuf;

use tracing::{error, info, Instrument};

use storefront::{setup_tracing, AdminForm, ProductId, StorefrontConfig, StorefrontPage, StorefrontSystem};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional path to a TOML config file.
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = StorefrontConfig::load(config_path.as_deref())?;

    setup_tracing(&config.log_level);
    info!("Starting storefront");

    let system = StorefrontSystem::new(&config)?;
    let client = system.client.clone();

    let span = tracing::info_span!("shopping");
    async {
        info!("Adding the hoodie twice");
        client.add_to_cart(ProductId(1)).await?;
        client.add_to_cart(ProductId(1)).await?;
        client.add_to_cart(ProductId(2)).await?;
        let total = client.cart_total().await?;
        info!(total = %total, "Cart filled");

        client.adjust_qty(ProductId(1), -1).await?;
        client.remove_line(ProductId(2)).await?;
        Ok::<_, storefront::StoreError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("admin");
    async {
        client.toggle_admin().await?;
        if let Err(e) = client.submit_product(AdminForm::new("El DUCE Cap", "abc", "10")).await {
            error!(error = %e, "Admin submission rejected");
        }
        let cap = client.submit_product(AdminForm::new("El DUCE Cap", "25", "10")).await?;
        client.add_to_cart(cap.id).await?;
        Ok::<_, storefront::StoreError>(())
    }
    .instrument(span)
    .await?;

    let view = client.snapshot().await?;
    info!("Rendered page:\n{}", StorefrontPage::new(&view, &system.currency));

    drop(client);
    system.shutdown().await?;

    info!("Storefront demo completed");
    Ok(())
}
