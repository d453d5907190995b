use anyhow::Result;
use dotenvy::dotenv;
use tokio_util::sync::CancellationToken;
use tracing::info;

use hls_transcoder::config::settings::TranscodeConfig;
use hls_transcoder::infrastructure::aws;
use hls_transcoder::infrastructure::iam::IamService;
use hls_transcoder::infrastructure::s3::StorageService;
use hls_transcoder::infrastructure::sns::NotificationService;
use hls_transcoder::infrastructure::transcoder::TranscoderService;
use hls_transcoder::workflow;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = TranscodeConfig::from_env();
    info!(
        "🎥 Starting transcode workflow: pipeline='{}' input={}/{}",
        config.pipeline_name, config.input_bucket, config.input_key
    );

    let sdk_config = aws::load(&config.region).await;
    let iam = IamService::new(&sdk_config);
    let storage = StorageService::new(&sdk_config);
    let transcoder = TranscoderService::new(&sdk_config);
    let sns = NotificationService::new(&sdk_config);

    // Ctrl-C abandons the wait; the job itself keeps running provider-side.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let outcome = workflow::run_transcode(
        &config,
        &iam,
        &storage,
        &transcoder,
        &transcoder,
        &sns,
        &cancel,
    )
    .await?;

    if outcome.state.is_success(config.warning_policy) {
        info!(
            "✅ Job {} on pipeline {} finished: {}",
            outcome.job_id, outcome.pipeline.id, outcome.state
        );
        Ok(())
    } else {
        anyhow::bail!(
            "job {} finished with status {}",
            outcome.job_id,
            outcome.state
        )
    }
}
