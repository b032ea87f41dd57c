use yatra_sevak::cli::ChatRenderer;
use yatra_sevak::gateway::CompletionGateway;
use yatra_sevak::llm::HuggingFaceProvider;
use yatra_sevak::logging;
use yatra_sevak::session::{ChatConfig, ChatSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env and environment overrides
    let config = ChatConfig::from_env()?;

    // Initialize logging system; the guard flushes on drop
    let _log_guard = logging::init_logging(&config.log_dir)?;

    tracing::info!("=== Yatra Sevak.AI Starting ===");
    match &config.env_file {
        Some(path) => tracing::debug!("Loaded environment from {:?}", path),
        None => tracing::debug!("No .env file loaded"),
    }
    tracing::debug!("Configuration: {:?}", config);

    // Create the hosted text-generation provider
    let provider = HuggingFaceProvider::from_config(&config)?;

    let gateway = CompletionGateway::new(provider).with_max_history_turns(config.max_history_turns);

    // The session is owned here and lent to the renderer
    let mut session = ChatSession::new(gateway);

    ChatRenderer::new().run(&mut session).await?;

    tracing::info!("=== Yatra Sevak.AI Shutting Down ===");

    Ok(())
}
