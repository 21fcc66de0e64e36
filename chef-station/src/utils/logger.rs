//! Logging Infrastructure
//!
//! The UI owns the terminal, so log output cannot go to stdout. Logs are
//! routed to the in-memory tui-logger widget (toggleable pane in the UI)
//! and, when a log directory is configured, to a daily-rolling file.

use std::path::Path;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logger
///
/// `log_dir` enables file output when it names an existing directory.
pub fn init_logger(log_dir: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter);

    match log_dir.filter(|dir| Path::new(dir).exists()) {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "chef-station");
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_target(false),
                )
                .init();
        }
        None => registry.init(),
    }

    // Also init the log crate adapter in case dependencies use log
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);
}
