use alert_feed::FeedClient;
use alert_monitor::{Monitor, MonitorConfig, Notifier};
use region_data::DatasetCache;
use tracing::info;
use wa_gateway::GatewayClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = MonitorConfig::from_env()?;

    info!("Connecting to gateway at {}", config.gateway.base_url);
    let gateway = GatewayClient::connect(config.gateway.clone()).await?;

    let feed = FeedClient::new(config.feed.clone())?;
    let cache = DatasetCache::new(config.dataset.clone())?;
    let notifier = Notifier::new(
        gateway,
        config.recipients.clone(),
        config.operator.clone(),
    );

    let monitor = Monitor::new(feed, cache, notifier, &config);

    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
    };

    monitor.run(shutdown).await?;
    Ok(())
}
