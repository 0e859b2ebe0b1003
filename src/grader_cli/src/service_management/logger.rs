use std::{
    fs::File,
    io::{self, IsTerminal},
    path::PathBuf,
    sync::Arc,
};

use anyhow::Context;
use tracing::{trace, Level};
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

#[derive(Debug)]
pub enum Verbosity {
    Info,
    Debug,
    Trace,
}

impl From<u8> for Verbosity {
    fn from(v: u8) -> Self {
        match v {
            0 => Verbosity::Info,
            1 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

impl From<Verbosity> for Level {
    fn from(v: Verbosity) -> Self {
        match v {
            Verbosity::Info => Level::INFO,
            Verbosity::Debug => Level::DEBUG,
            Verbosity::Trace => Level::TRACE,
        }
    }
}

pub enum LoggingMode {
    Full,
    Json,
    Compact,
}

/// Installs the global subscriber. Logs never go to stdout, which carries the report.
pub fn log(
    debug_level: Verbosity,
    mode: LoggingMode,
    log_file: Option<&PathBuf>,
) -> anyhow::Result<()> {
    let level: Level = debug_level.into();
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env()?;

    let writer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("[logger] Failed to create log file {}", path.display()))?;
            BoxMakeWriter::new(Arc::new(file))
        }
        None => BoxMakeWriter::new(io::stderr),
    };
    let ansi = log_file.is_none() && io::stderr().is_terminal();

    let layer = match mode {
        LoggingMode::Compact => fmt::layer()
            .compact()
            .with_ansi(ansi)
            .with_target(false)
            .with_writer(writer)
            .boxed(),
        LoggingMode::Json => fmt::layer()
            .json()
            .flatten_event(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(writer)
            .boxed(),
        LoggingMode::Full => fmt::layer()
            .pretty()
            .with_ansi(ansi)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_writer(writer)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .try_init()?;
    trace!(set_level = %level, "log level set");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_debug_count() {
        assert_eq!(Level::from(Verbosity::from(0)), Level::INFO);
        assert_eq!(Level::from(Verbosity::from(1)), Level::DEBUG);
        assert_eq!(Level::from(Verbosity::from(5)), Level::TRACE);
    }
}
