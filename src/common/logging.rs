use clap::ValueEnum;
use std::io;
use tracing::Level;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    No,
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn to_tracing_level(&self) -> Option<Level> {
        match self {
            LogLevel::No => None,
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Warning => Some(Level::WARN),
            LogLevel::Error => Some(Level::ERROR),
        }
    }
}

/// Installs the global subscriber. With an empty `log_file` everything goes to
/// stdout; otherwise to a daily-rolling file in the working directory. Returns
/// the appender guard, which must stay alive for the file writer to flush.
pub fn init_logger(
    log_level: LogLevel,
    log_file: String,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let level = log_level.to_tracing_level()?;

    let env_filter =
        EnvFilter::from_default_env().add_directive(level.as_str().parse().unwrap());

    if log_file.is_empty() {
        let subscriber = fmt()
            .with_writer(io::stdout)
            .with_env_filter(env_filter)
            .with_file(false)
            .with_target(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("stdout logging couldn't be installed");

        None
    } else {
        let file_appender = rolling::daily(".", log_file);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let subscriber = fmt()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_env_filter(env_filter)
            .with_file(false)
            .with_target(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("file logging couldn't be installed");

        Some(guard)
    }
}
