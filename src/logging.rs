//! Diagnostics go to stderr through `tracing`; stdout carries only the
//! rendered views.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Explicit level from the command line. `None` defers to `RUST_LOG`.
    pub level: Option<LevelFilter>,
    pub format: LogFormat,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: LogFormat::default(),
            with_ansi: false,
        }
    }
}

impl LogConfig {
    /// `-q` wins over `-v`; no flag at all leaves the choice to `RUST_LOG`.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            Some(LevelFilter::ERROR)
        } else {
            match verbose {
                0 => None,
                1 => Some(LevelFilter::INFO),
                2 => Some(LevelFilter::DEBUG),
                _ => Some(LevelFilter::TRACE),
            }
        };
        Self {
            level,
            ..Self::default()
        }
    }

    pub fn env_filter(&self) -> EnvFilter {
        match self.level {
            Some(level) => EnvFilter::default().add_directive(level.into()),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::WARN.into())),
        }
    }
}

pub fn init_logging(config: &LogConfig) -> Result<(), String> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    result.map_err(|e| e.to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/logging.rs"]
mod tests;
