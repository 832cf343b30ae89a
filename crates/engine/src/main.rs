//! WizBattle Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wizbattle_domain::SamplingTable;
use wizbattle_engine::{
    api,
    infrastructure::{config::AppConfig, ollama::OllamaClient},
    prompt_templates::PromptCatalog,
    App,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wizbattle_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting WizBattle Engine");

    let config = AppConfig::from_env()?;

    let llm = Arc::new(OllamaClient::with_timeout(
        &config.ollama_base_url,
        &config.ollama_model,
        config.ollama_timeout_secs,
    ));
    tracing::info!(
        base_url = %config.ollama_base_url,
        model = %config.ollama_model,
        timeout_secs = config.ollama_timeout_secs,
        "Ollama client configured"
    );

    let app = Arc::new(App::new(
        llm,
        PromptCatalog::from_env(),
        SamplingTable::standard(),
    ));

    let router = api::router(app, &config.cors_allowed_origins);

    // Start server
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("invalid bind address {}", config.bind_address()))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
