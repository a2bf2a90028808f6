use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use minlevel_logging::LoggingDispatch;
use minlevel_web::config::ProbeConfig;
use minlevel_web::state::AppState;

#[derive(Parser)]
#[command(
    name = "minlevel-web",
    about = "Serves probes that check configured minimum log levels"
)]
struct Cli {
    /// Path to config file (default: ~/.config/minlevel/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ProbeConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.http_port = port;
    }

    let logging = LoggingDispatch::new(config.logging);
    logging.install_global()?;
    info!(
        min_level = %logging.config().min_level,
        level = %logging.config().level,
        categories = logging.config().categories.len(),
        "loaded logging config"
    );

    let state = AppState::new(logging);
    let app = minlevel_web::build_router(state.clone());

    let addr = SocketAddr::from(([127, 0, 0, 1], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("minlevel-web listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    match state.logging().witness().total() {
        Ok(total) => info!(witnessed = total, "minlevel-web shut down"),
        Err(e) => warn!(error = %e, "minlevel-web shut down"),
    }
    Ok(())
}
