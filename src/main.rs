mod config;
mod error;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "stellar stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = config::ServerConfig::from_env()?;
    let options = config::leptos_options(&config)?;
    let addr = config.bind_addr();

    let app = routes::app(options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "stellar listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
