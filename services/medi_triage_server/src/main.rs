use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use medi_triage_server::{app, logging, ServerConfig, ServerError};

#[derive(Debug, Parser)]
#[command(
    name = "medi-triage",
    version,
    about = "Heuristic symptom triage HTTP API",
    long_about = "medi-triage serves a small HTTP API that turns self-reported symptoms and\n\
        vital signs into a heuristic triage level. It is not a diagnostic tool.\n\n\
        EXAMPLES:\n\
        \n  medi-triage                              Serve on 0.0.0.0:8000\n\
        \n  medi-triage --config triage.toml -v      Load settings, debug logging\n\
        \n  medi-triage --host 127.0.0.1 --port 9000 Bind a specific address"
)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Address to bind (overrides the config file)
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn resolve_config(&self) -> Result<ServerConfig, ServerError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        config.validate()?;
        Ok(config)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

async fn run(cli: Cli) -> Result<(), ServerError> {
    let config = cli.resolve_config()?;
    let level = config.log_filter(cli.verbose)?;
    if let Err(e) = logging::init(level) {
        eprintln!("warning: logger already initialized: {e}");
    }

    let router = app(&config)?;
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    log::info!("medi-triage listening on http://{}", listener.local_addr()?);
    if config.scoring.seed.is_some() {
        log::warn!("Scoring RNG is seeded; every assessment of the same input is identical");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
