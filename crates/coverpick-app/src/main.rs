use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use coverpick_config::{Config, Environment};
use coverpick_lookup::HttpLookupClient;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod io;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// Look up book cover thumbnails by title
#[derive(Parser, Debug)]
#[command(name = "coverpick", version)]
struct Args {
    /// JSON config file; environment variables fill whatever it leaves out
    #[arg(long)]
    config: Option<String>,

    /// Which lookup service deployment to use (local or deployed)
    #[arg(long = "env", value_parser = parse_environment)]
    environment: Option<Environment>,

    /// Lookup endpoint URL, overrides --env
    #[arg(long)]
    endpoint: Option<String>,

    /// Rewrite this file with the widget markup after every change
    #[arg(long)]
    html_out: Option<String>,
}

fn parse_environment(value: &str) -> Result<Environment, String> {
    Environment::parse(value).ok_or_else(|| format!("unknown environment '{value}'"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,coverpick_app=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {path}"))?,
        None => Config::new(),
    };

    if let Some(environment) = args.environment {
        config.lookup.environment = environment;
    }
    if let Some(endpoint) = &args.endpoint {
        config.lookup.endpoint = Some(endpoint.clone());
    }
    if let Some(html_out) = &args.html_out {
        config.ui.html_out = Some(html_out.clone());
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let config = load_config(&args)?;

    let client = HttpLookupClient::from_config(&config.lookup);
    tracing::info!(
        "Lookup endpoint {} (timeout {:?}, max {} results)",
        config.lookup.endpoint_url(),
        config.lookup.timeout(),
        config.lookup.max_results
    );

    {
        let client = client.clone();
        tokio::spawn(async move {
            match client.health().await {
                Ok(()) => tracing::info!("Lookup service is reachable"),
                Err(e) => tracing::warn!("Lookup service health check failed: {}", e),
            }
        });
    }

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(Arc::new(client));

    println!("{}", io::HELP);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        _ = controller.cancelled() => {
            tracing::info!("Widget closed");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("task exited early"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();

    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task failed during shutdown: {e}"),
            Err(e) => tracing::error!("task panicked during shutdown: {e}"),
        }
    }

    Ok(())
}
