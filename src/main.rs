use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use docsum::application::ports::{
    BatchObserver, ConnectivityProbe, FileLoader, LlmClient, SamplingOptions, SummaryRepository,
};
use docsum::application::services::{
    BatchSummarizer, ImageAnalysisService, SummarizationService,
};
use docsum::infrastructure::llm::{OllamaClient, OllamaProbe};
use docsum::infrastructure::observability::{TracingBatchObserver, TracingConfig, init_tracing};
use docsum::infrastructure::persistence::{PgSummaryRepository, create_pool, run_migrations};
use docsum::infrastructure::text_processing::CompositeFileLoader;
use docsum::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.json,
    ));

    let repository: Option<Arc<dyn SummaryRepository>> = match &settings.database.url {
        Some(url) => {
            let pool = create_pool(url, settings.database.max_connections).await?;
            run_migrations(&pool).await?;
            Some(Arc::new(PgSummaryRepository::new(pool)))
        }
        None => {
            tracing::warn!("No database configured, summaries will not be stored");
            None
        }
    };

    let ollama = &settings.ollama;
    let probe: Arc<dyn ConnectivityProbe> = Arc::new(OllamaProbe::new(
        ollama.host.clone(),
        Duration::from_secs(ollama.probe_timeout_secs),
    ));
    let llm_client: Arc<dyn LlmClient> = Arc::new(OllamaClient::new(ollama.host.clone()));
    let file_loader: Arc<dyn FileLoader> = Arc::new(CompositeFileLoader::with_default_adapters());
    let observer: Arc<dyn BatchObserver> = Arc::new(TracingBatchObserver);

    let summarization_service = Arc::new(SummarizationService::new(
        probe,
        Arc::clone(&llm_client),
        ollama.summary_model.clone(),
        SamplingOptions {
            temperature: ollama.temperature,
            top_p: ollama.top_p,
            top_k: ollama.top_k,
        },
    ));

    let batch_summarizer = Arc::new(BatchSummarizer::new(
        file_loader,
        summarization_service,
        repository.clone(),
        observer,
    ));

    let image_analysis_service = Arc::new(ImageAnalysisService::new(
        llm_client,
        repository,
        ollama.vision_model.clone(),
    ));

    let state = AppState {
        batch_summarizer,
        image_analysis_service,
        allowed_origins: settings.server.allowed_origins.clone(),
        max_upload_bytes: settings.max_upload_bytes(),
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %addr,
        ollama_host = %ollama.host,
        summary_model = %ollama.summary_model,
        "Listening"
    );

    axum::serve(listener, router).await?;

    Ok(())
}
