//! Wiring & DI. Entry point: load config, pick the transcript client, build the view, run UI.
//! No business logic here.

use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use transcript_viewer::adapters::http::HttpTranscriptClient;
use transcript_viewer::adapters::memory::InMemoryTranscriptClient;
use transcript_viewer::adapters::observability::TracingObserver;
use transcript_viewer::adapters::ui::tui::TuiInputPort;
use transcript_viewer::ports::{InputPort, TranscriptClient, ViewObserver};
use transcript_viewer::shared::config::AppConfig;
use transcript_viewer::usecases::{EnrollmentService, TranscriptView};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    // --- Data access client ---
    let client: Arc<dyn TranscriptClient> = if cfg.is_demo() {
        warn!("TRANSCRIPTS_DEMO is set, using seeded in-memory transcripts");
        Arc::new(InMemoryTranscriptClient::demo())
    } else {
        let url = cfg.api_url_or_default();
        let timeout = cfg.request_timeout_or_default();
        info!(url = %url, timeout_secs = timeout.as_secs(), "using transcript service");
        Arc::new(
            HttpTranscriptClient::new(&url, timeout).map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    };

    transcript_viewer::adapters::ui::init_ui();

    // --- View + forms ---
    let observer: Arc<dyn ViewObserver> = Arc::new(TracingObserver);
    let view = TranscriptView::new(Arc::clone(&client), observer);
    let enrollment = Arc::new(EnrollmentService::new(client));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(view, enrollment));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
