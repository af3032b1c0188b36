// Folio - animated portfolio for the terminal
//
// A tick-driven ratatui application rendering the portfolio's
// presentation layer: a certificates carousel, an experience timeline,
// a skills grid, a rotating 3D skill constellation with hover-triggered
// explosions, and a pair of eyes that follow the pointer.
//
// Architecture:
// - anim: pure animation drivers (carousel, explosion, gaze, graph)
// - data: the static portfolio content tables
// - tui (ratatui): event loop, per-frame update pass, canvas scenes
// - logging: tracing events captured into an in-memory ring buffer

mod anim;
mod cli;
mod config;
mod data;
mod logging;
mod theme;
mod tui;

use anyhow::Result;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --update)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Logs go to an in-memory buffer the TUI renders on demand; writing
    // to stdout would break through the alternate screen.
    let log_buffer = LogBuffer::new();

    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("folio={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Optional rotating JSON file logs alongside the in-memory buffer.
    // The guard must stay alive for the duration of the program so
    // buffered writes flush on exit.
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> = if config
        .logging
        .file_enabled
    {
        if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
            eprintln!(
                "Warning: Could not create log directory {:?}: {}",
                config.logging.file_dir, e
            );
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        } else {
            let file_appender = match config.logging.file_rotation {
                LogRotation::Hourly => tracing_appender::rolling::hourly(
                    &config.logging.file_dir,
                    &config.logging.file_prefix,
                ),
                LogRotation::Daily => tracing_appender::rolling::daily(
                    &config.logging.file_dir,
                    &config.logging.file_prefix,
                ),
                LogRotation::Never => tracing_appender::rolling::never(
                    &config.logging.file_dir,
                    &config.logging.file_prefix,
                ),
            };

            // Writes happen on a background thread
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();

            Some(guard)
        }
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer.clone()))
            .init();
        None
    };

    tracing::info!(
        version = config::VERSION,
        fps = config.fps,
        theme = %config.theme,
        "Starting folio"
    );

    let result = tui::run_tui(log_buffer, config).await;

    if let Err(e) = &result {
        tracing::error!("TUI error: {:?}", e);
    }
    tracing::info!("Shutdown complete");

    result
}
