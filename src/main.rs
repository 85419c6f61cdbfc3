use std::sync::Arc;

use mbpay::{
    config::SharedConfig, logging::init_tracing_from_env, services::SharedMbpayClient,
    MbpayClient, MbpayConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing_from_env();

    tracing::info!("MBPay balance check v{}", env!("CARGO_PKG_VERSION"));

    let config: SharedConfig = Arc::new(
        MbpayConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?,
    );

    tracing::info!(base_url = %config.base_url, app_id = %config.app_id, "Configuration loaded");

    let client: SharedMbpayClient = Arc::new(MbpayClient::new(&config)?);
    let balance = client.get_balance().await?;

    tracing::info!(
        balance = balance.balance,
        frozen = balance.frozen,
        "Merchant balance retrieved"
    );

    Ok(())
}
