use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Holds the file writer guard; keep it alive for the whole process so
/// buffered lines are flushed on shutdown.
pub struct Logger {
    _guard: WorkerGuard,
}

impl Logger {
    pub fn new(component: &str, is_dev: bool) -> Self {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let file_name = format!("backoffice_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info,sqlx=warn"));

        let default_console = if is_dev { "debug,sqlx=warn" } else { "info,sqlx=warn" };
        let console_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_console));

        let console_layer = fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(is_dev)
            .with_filter(console_filter);

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        if registry.try_init().is_err() {
            eprintln!("tracing subscriber already installed, keeping the existing one");
        }

        Self { _guard: guard }
    }
}
