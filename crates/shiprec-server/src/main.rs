//! HTTP service exposing recovered carrier invoice records.

mod app;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::AppState;

/// Carrier invoice recovery API
#[derive(Parser)]
#[command(name = "shiprec-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Directory containing invoice text dumps
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let router = app::router(AppState {
        data_dir: cli.data_dir,
    });

    let listener = tokio::net::TcpListener::bind(cli.addr).await?;
    tracing::info!("listening on {}", cli.addr);
    axum::serve(listener, router).await?;
    Ok(())
}
