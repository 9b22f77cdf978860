mod config;
mod routes;

use std::process::ExitCode;

use config::{ConfigError, HostConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "agora exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ConfigError> {
    let config = HostConfig::from_env()?;
    let leptos = leptos::config::get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;

    let app = routes::app(leptos.leptos_options);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(|source| ConfigError::Bind { port: config.port, source })?;

    tracing::info!(port = %config.port, "agora listening");
    axum::serve(listener, app).await.map_err(ConfigError::Serve)
}
