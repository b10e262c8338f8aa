use tracing_appender::{non_blocking::WorkerGuard, rolling};

use crate::config::Config;

/// Installs the global subscriber writing to a daily rolling file under
/// `config.log_dir`. Keep the guard alive for the life of the process or
/// buffered lines are lost.
pub fn init_tracing(config: &Config) -> WorkerGuard {
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    guard
}
