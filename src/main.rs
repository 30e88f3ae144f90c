//! Bookshelf - Personal Library Manager
//!
//! Runs either the interactive console menu or the web server.

use clap::Parser;
use std::net::SocketAddr;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf::{
    cli::{Cli, Commands},
    config::AppConfig,
    console::Console,
    create_router, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    cli.apply_overrides(&mut config);

    init_tracing(&config);
    tracing::info!("Starting Bookshelf v{}", env!("CARGO_PKG_VERSION"));

    match cli.command.unwrap_or(Commands::Console) {
        Commands::Console => run_console(config).await,
        Commands::Serve { .. } => run_server(config).await,
    }
}

/// Logs go to stderr so the console menu keeps stdout to itself
fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookshelf={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run_console(config: AppConfig) -> anyhow::Result<()> {
    let state = AppState::new(config).await?;
    let console = Console::new(
        state.services.library.clone(),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    console.run().await?;
    Ok(())
}

async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    tracing::info!("Library file: {}", config.library.path.display());

    let state = AppState::new(config).await?;
    let library = state.services.library.clone();
    let app = create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    library.save().await?;
    tracing::info!("Library saved, shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
