use anyhow::{Context, Result};
use clap::Args;
use palletcalc::{config::Config, server};
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Path to the configuration file (TOML or JSON).
    pub config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured port.
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    pub fn run(&self) -> Result<()> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        config.validate()?;

        match &self.config {
            Some(path) => tracing::info!("Starting palletcalc with config: {}", path.display()),
            None => tracing::info!("Starting palletcalc with built-in defaults"),
        }

        start_server(config)
    }
}

/// Start the HTTP server
#[tokio::main]
async fn start_server(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    tracing::info!("Server listening on {}", addr);

    let state = server::AppState::new(config);
    let app = server::create_router(state);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
