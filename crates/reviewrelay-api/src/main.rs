//! GitLab webhook relay entry point.
//!
//! Binary name: `rvrelay`
//!
//! Loads `.env`, snapshots the relay configuration from the environment,
//! wires the Mastra client into shared state, and serves the four relay
//! routes until Ctrl+C or SIGTERM.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use reviewrelay_api::http;
use reviewrelay_api::state::AppState;
use reviewrelay_types::config::RelayConfig;

/// Receive GitLab webhooks and forward them to a remote Mastra API for
/// code review.
#[derive(Debug, Parser)]
#[command(name = "rvrelay", version)]
struct Cli {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = RelayConfig::from_env();
    let mastra_api_url = config.mastra_api_url.clone();
    let state = AppState::new(config);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!(
        "  {} GitLab webhook relay listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("    Webhook endpoint:  POST /webhook/gitlab");
    println!("    Health check:      GET  /health");
    println!("    Mastra API test:   GET  /test/mastra-api");
    println!("    System info:       GET  /info");
    println!();
    println!(
        "  {} Mastra API URL: {}",
        console::style("🌐").bold(),
        console::style(&mastra_api_url).cyan()
    );

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
