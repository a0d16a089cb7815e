// folio binary entrypoint.
// Parses arguments, sets up file logging, and runs the TUI.

mod app;
mod cache;
mod config;
mod error;
mod github;
mod portfolio;
mod state;
mod ui;
mod util;

use std::sync::OnceLock;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{Args, Config};

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Log to a file under the cache dir; the terminal belongs to the TUI.
fn init_logging(level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file = cache::paths::log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok()?;
        }
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok()
            .map(|file| (path, file))
    });

    match file {
        Some((path, file)) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %path.display(), "logging initialized");
        }
        None => {
            // Fallback: stderr, kept quiet so it does not fight the TUI
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("error"))
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = Config::from_args(&args);
    tracing::info!(user = %config.user, threshold = config.threshold, "folio starting");

    let mut app = match app::App::new(config) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!(error = %err, "failed to start");
            eprintln!("folio: {err}");
            std::process::exit(1);
        }
    };

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    if let Err(err) = result {
        tracing::error!(error = ?err, "Application error");
        eprintln!("folio: {err}");
        std::process::exit(1);
    }
    tracing::info!("folio exited");
}
