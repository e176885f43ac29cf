//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Log output goes to stderr. `RUST_LOG` overrides the level picked from
//! CLI flags unless the user asked for a level explicitly.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for this workspace's crates; external crates stay at warn.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` take precedence when set.
    pub use_env_filter: bool,
    pub format: LogFormat,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
            format: LogFormat::default(),
            with_ansi: true,
        }
    }
}

/// Initialize the global subscriber.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_logging(config: &LogConfig) {
    let filter = if config.use_env_filter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directives(config.level_filter)))
    } else {
        EnvFilter::new(default_directives(config.level_filter))
    };

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_target(true))
                .init();
        }
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .compact()
                        .with_ansi(config.with_ansi)
                        .with_target(true),
                )
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(config.with_ansi).with_target(true))
                .init();
        }
    }
}

fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    format!(
        "warn,regdesk_server={level},regdesk_submit={level},regdesk_map={level},\
         regdesk_model={level}"
    )
}
