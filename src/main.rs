use clap::Parser;
use site_relay::utils::{logger, validation::Validate};
use site_relay::{rest, GatewayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GatewayConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting site-relay gateway");
    if config.verbose {
        tracing::debug!("Gateway config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if config.payment_secret_key.is_none() {
        tracing::warn!("payment secret key not configured; /create-checkout will return 500");
    }
    if config.tracker_token.is_none() {
        tracing::warn!("tracker token not configured; issue listing uses anonymous rate limits");
    }

    rest::serve(config).await
}
