//! Highlight detection binary.

use anyhow::Context;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::info;

use reelcut_cli::{logging, CliConfig, JsonAudioFeatures, JsonTranscriptFile, LoggingClipSink};
use reelcut_highlights::{
    AudioFeatureProvider, Detection, HighlightDetector, HighlightPipeline, NoAudioFeatures,
};
use reelcut_models::HighlightsData;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = CliConfig::parse();
    logging::init(config.json_logs || logging::json_from_env());

    let metrics = if config.print_metrics {
        Some(
            PrometheusBuilder::new()
                .install_recorder()
                .context("Failed to install Prometheus recorder")?,
        )
    } else {
        None
    };

    info!(transcript = %config.transcript.display(), "Starting reelcut");

    let detection = if config.no_audio {
        run(&config, NoAudioFeatures).await?
    } else {
        run(&config, JsonAudioFeatures::new(config.audio_features.clone())).await?
    };

    let fallback_used = detection.is_fallback();
    let data = HighlightsData::new(detection.highlights)
        .with_source(config.transcript.display().to_string())
        .with_fallback_used(fallback_used);
    let json = serde_json::to_string_pretty(&data).context("Failed to serialize highlights")?;

    match &config.output {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(output = %path.display(), "Highlights written");
        }
        None => println!("{}", json),
    }

    if let Some(handle) = metrics {
        eprintln!("{}", handle.render());
    }

    Ok(())
}

async fn run<A>(config: &CliConfig, audio: A) -> anyhow::Result<Detection>
where
    A: AudioFeatureProvider,
{
    let detection_config = config.detection_config();
    detection_config
        .validate()
        .context("Invalid detection bounds")?;

    let pipeline = HighlightPipeline::new(
        JsonTranscriptFile,
        audio,
        HighlightDetector::default(),
        detection_config,
    );
    let sink = LoggingClipSink::new();

    pipeline
        .run_into(&config.transcript, &sink)
        .await
        .with_context(|| format!("Highlight detection failed for {}", config.transcript.display()))
}
