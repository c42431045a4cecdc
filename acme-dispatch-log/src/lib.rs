//! acme-dispatch Logging
//!
//! Installs a [`tracing`] subscriber configured from `ACME_DISPATCH_*`
//! environment variables. Library code only emits `tracing` events; binaries
//! call [`init`] once at startup.
//!
//! # Usage
//!
//! ```rust,no_run
//! use acme_dispatch_log::{LogConfig, Level};
//!
//! let config = LogConfig::from_env().with_level(Level::Debug);
//! acme_dispatch_log::init(&config).expect("logging already initialized");
//!
//! tracing::info!("ready");
//! ```
//!
//! # Environment Variables
//!
//! - `ACME_DISPATCH_DEBUG=1` - Enable debug logging
//! - `ACME_DISPATCH_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `ACME_DISPATCH_LOG_FORMAT=pretty|compact|json` - Set output format
//! - `ACME_DISPATCH_LOG_COLOR=1|0` - Enable/disable colors
//! - `ACME_DISPATCH_LOG_TIMESTAMPS=1|0` - Enable/disable timestamps
//!
//! `RUST_LOG`, when set, takes precedence over the configured level unless
//! [`LogConfig::with_rust_log`] turned that off.

use std::fmt;
use std::io::IsTerminal;
use std::str::FromStr;
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer, fmt as tfmt};

/// Environment variable names
pub mod env_vars {
    pub const DEBUG: &str = "ACME_DISPATCH_DEBUG";
    pub const LEVEL: &str = "ACME_DISPATCH_LOG_LEVEL";
    pub const FORMAT: &str = "ACME_DISPATCH_LOG_FORMAT";
    pub const COLOR: &str = "ACME_DISPATCH_LOG_COLOR";
    pub const TIMESTAMPS: &str = "ACME_DISPATCH_LOG_TIMESTAMPS";
}

// ============================================================================
// Log Levels
// ============================================================================

/// Minimum level of events that get written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Trace level (most verbose)
    Trace,
    Debug,
    Info,
    Warn,
    /// Error level (least verbose)
    Error,
    /// Off (no logging)
    Off,
}

impl Level {
    /// Filter directive understood by [`EnvFilter`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Off => "off",
        }
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "off" | "none" => Ok(Level::Off),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Log Format
// ============================================================================

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Multi-line, human readable
    Pretty,
    /// Single-line
    Compact,
    /// Newline-delimited JSON
    Json,
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Format::Pretty),
            "compact" => Ok(Format::Compact),
            "json" => Ok(Format::Json),
            _ => Err(LogError::InvalidFormat(s.to_string())),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Invalid log format: {0}")]
    InvalidFormat(String),

    #[error("Failed to install log subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether debug mode is enabled
    pub debug: bool,
    /// Minimum log level
    pub level: Level,
    /// Output format
    pub format: Format,
    /// Whether colors are enabled
    pub color: bool,
    /// Whether to include timestamps
    pub timestamps: bool,
    /// Whether to include the event target (module path)
    pub module_path: bool,
    /// Whether `RUST_LOG` replaces `level` when it is set
    pub rust_log: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Warn,
            format: Format::Compact,
            color: false,
            timestamps: true,
            module_path: true,
            rust_log: true,
        }
    }
}

impl LogConfig {
    /// Create config from environment variables.
    ///
    /// Invalid values fall back to the defaults.
    pub fn from_env() -> Self {
        let color_default = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        Self::from_lookup(|key| std::env::var(key).ok(), color_default)
    }

    /// Like [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F, color_default: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str, default: bool| lookup(key).map(|v| parse_flag(&v)).unwrap_or(default);

        let debug = flag(env_vars::DEBUG, false);

        let level = lookup(env_vars::LEVEL)
            .and_then(|s| s.parse().ok())
            .unwrap_or(if debug { Level::Debug } else { Level::Warn });

        let format = lookup(env_vars::FORMAT)
            .and_then(|s| s.parse().ok())
            .unwrap_or(Format::Compact);

        Self {
            debug,
            level,
            format,
            color: flag(env_vars::COLOR, color_default) && format != Format::Json,
            timestamps: flag(env_vars::TIMESTAMPS, true),
            module_path: true,
            rust_log: true,
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        if format == Format::Json {
            self.color = false;
        }
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color && self.format != Format::Json;
        self
    }

    /// Enable debug mode, lowering the level to at least `debug`.
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        if enabled && self.level > Level::Debug {
            self.level = Level::Debug;
        }
        self
    }

    /// Let `RUST_LOG` override the configured level, or ignore it.
    ///
    /// Binaries turn this off when the level comes from an explicit flag.
    pub fn with_rust_log(mut self, enabled: bool) -> Self {
        self.rust_log = enabled;
        self
    }

    /// Event filter: `RUST_LOG` if allowed and set, the configured level otherwise.
    pub fn filter(&self) -> EnvFilter {
        let level = || EnvFilter::new(self.level.as_str());
        if !self.rust_log {
            return level();
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| level())
    }
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

// ============================================================================
// Subscriber
// ============================================================================

fn fmt_layer<S>(config: &LogConfig) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let base = tfmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.color)
        .with_target(config.module_path);

    match (config.format, config.timestamps) {
        (Format::Pretty, true) => base.pretty().boxed(),
        (Format::Pretty, false) => base.pretty().without_time().boxed(),
        (Format::Compact, true) => base.compact().boxed(),
        (Format::Compact, false) => base.compact().without_time().boxed(),
        (Format::Json, true) => base.json().boxed(),
        (Format::Json, false) => base.json().without_time().boxed(),
    }
}

/// Install the global subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init(config: &LogConfig) -> Result<(), LogError> {
    tracing_subscriber::registry()
        .with(config.filter())
        .with(fmt_layer(config))
        .try_init()?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
