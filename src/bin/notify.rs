use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;

use hls_transcoder::config::settings::NotifyConfig;
use hls_transcoder::infrastructure::aws;
use hls_transcoder::infrastructure::sns::NotificationService;
use hls_transcoder::workflow;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = NotifyConfig::from_env();
    info!("📣 Publishing to topic '{}'", config.topic_name);

    let sdk_config = aws::load(&config.region).await;
    let sns = NotificationService::new(&sdk_config);

    let receipt = workflow::run_notify(&config, &sns).await?;
    info!("message_id={}", receipt.message_id);
    Ok(())
}
