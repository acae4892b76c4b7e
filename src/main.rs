use std::sync::Arc;

use proctoring_client::frameworks::config;
use proctoring_client::{EnvToken, ProctoringApi, ProctoringClient};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

// Smoke driver: probes the configured proctoring service with a read-only
// call so deployments can verify connectivity and credentials.
#[tokio::main]
async fn main() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let credentials = Arc::new(EnvToken::new(config::TOKEN_ENV_VAR));
    let client = ProctoringClient::from_env(credentials);

    tracing::info!(api_root = %config::api_root(), "probing proctoring service");
    match client.get_active_sessions().await {
        Ok(sessions) => tracing::info!(%sessions, "active sessions"),
        Err(err) => tracing::error!(error = %err, "failed to reach proctoring service"),
    }
}
