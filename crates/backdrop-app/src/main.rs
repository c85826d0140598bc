mod bootstrap;
mod cli;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use backdrop_common::{BackdropError, ConfigError};
use backdrop_config::{BackdropConfig, LogLevel, API_KEY_ENV};
use backdrop_picker::{Backdrop, ImagePicker, PexelsClient, RandomSource, StdRandom};

/// How long the picker waits for bootstrap to publish its settings.
const READY_TIMEOUT: Duration = Duration::from_secs(5);

fn render(backdrop: &Backdrop) -> &str {
    match backdrop {
        Backdrop::Photo(url) => url.as_str(),
        Backdrop::Fallback => "fallback",
    }
}

async fn run(config: BackdropConfig, count: u32, seed: Option<u64>) -> backdrop_common::Result<()> {
    let client = PexelsClient::new(bootstrap::client_config(&config))
        .map_err(|e| BackdropError::Provider(e.to_string()))?;
    let rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(StdRandom::seeded(seed)),
        None => Box::new(StdRandom::new()),
    };
    let mut picker = ImagePicker::new(Arc::new(client), rng);

    let (publisher, ready) = backdrop_common::readiness();
    let bootstrap_task = tokio::spawn(async move { bootstrap::publish(publisher, &config) });

    match tokio::time::timeout(READY_TIMEOUT, picker.configure_when_ready(ready)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!("{e}, background stays on fallback"),
        Err(_) => {
            tracing::warn!("Timed out waiting for configuration, background stays on fallback")
        }
    }
    if let Err(e) = bootstrap_task.await {
        tracing::warn!("Bootstrap task failed: {e}");
    }

    for i in 0..count {
        let backdrop = if i == 0 {
            picker.load().await
        } else {
            picker.refresh().await
        };
        println!("{}", render(&backdrop));
    }
    Ok(())
}

/// The config as JSON, or the load error. Unlike a normal run, printing
/// does not fall back to defaults.
fn print_config(loaded: Result<BackdropConfig, ConfigError>) -> backdrop_common::Result<String> {
    Ok(backdrop_config::config_to_json(&loaded?))
}

fn exit_code(result: backdrop_common::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();
    let directive = args.log_level.as_deref();

    let (subscriber, filter) = logging::subscriber(
        logging::log_filter(directive, LogLevel::default()),
        std::io::stderr,
    );
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install log subscriber: {e}");
    }

    tracing::info!("Backdrop v{} starting...", env!("CARGO_PKG_VERSION"));
    let loaded = bootstrap::load_config(args.config.as_ref().map(PathBuf::from));
    if let Ok(config) = &loaded {
        logging::apply_config_level(&filter, directive, config.logging.level);
    }

    if args.print_config {
        return exit_code(print_config(loaded).map(|json| println!("{json}")));
    }

    let config = bootstrap::config_or_default(loaded, std::env::var(API_KEY_ENV).ok());
    exit_code(run(config, args.count, args.seed).await)
}
