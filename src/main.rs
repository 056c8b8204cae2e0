//! Tic-tac-toe server entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_server::{AppState, Cli, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting tic-tac-toe server");

    let state = AppState::new();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(host = %cli.host, port = cli.port, "Server ready");
    info!("Endpoints: /newgame, /play?x=&y=, /undo");

    axum::serve(listener, app).await?;

    Ok(())
}
