use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{LogLevel, PluginConfig};

/// Configuration for the logging system
pub struct LogConfig {
    /// Directory where log files will be stored; `None` disables file output
    pub log_dir: Option<PathBuf>,
    /// Prefix for log file names
    pub file_prefix: String,
    /// Maximum number of log files to keep (rotation)
    pub max_files: usize,
    /// Level used when RUST_LOG is not set
    pub level: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            file_prefix: "shortpath".to_string(),
            max_files: 5,
            level: LogLevel::Info,
        }
    }
}

impl LogConfig {
    pub fn from_plugin_config(config: &PluginConfig) -> Result<Self> {
        let log_dir = if config.log_to_file {
            Some(PluginConfig::data_dir()?.join("logs"))
        } else {
            None
        };

        Ok(Self {
            log_dir,
            max_files: config.log_max_files,
            level: config.log_level,
            ..Self::default()
        })
    }
}

/// Initialize the logging system.
///
/// Human-readable output goes to stderr so stdout stays reserved for paths.
/// With a log directory configured, a JSON layer writes to a daily rolling
/// file as well.
///
/// # Log Targets
/// - `plugin` / `plugin::short_path` / `plugin::identity` - plugin operations
/// - `platform` - calls into the OS
/// - `config` - settings load/save
/// - `main` - CLI lifecycle
///
/// # Example
/// ```bash
/// RUST_LOG=plugin=debug,platform=trace shortpath "C:\Program Files"
/// ```
pub fn init_logging(config: LogConfig) -> Result<LogGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let stderr_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_filter(env_filter.clone());

    let (file_layer, worker_guard) = match &config.log_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir).context("Failed to create log directory")?;

            let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
                .rotation(tracing_appender::rolling::Rotation::DAILY)
                .filename_prefix(&config.file_prefix)
                .filename_suffix("log")
                .max_log_files(config.max_files)
                .build(log_dir)
                .context("Failed to create file appender")?;

            // IMPORTANT: The guard MUST be kept alive for the entire application lifetime
            let (non_blocking_file, worker_guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_target(true)
                .with_thread_ids(true)
                .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
                .with_filter(env_filter);

            (Some(layer), Some(worker_guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(
        target: "main",
        log_dir = ?config.log_dir,
        max_files = config.max_files,
        "Logging system initialized"
    );

    Ok(LogGuard {
        _worker_guard: worker_guard,
    })
}

/// Guard that ensures file logs are flushed before exit
pub struct LogGuard {
    _worker_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        tracing::trace!(target: "main", "Flushing logs before shutdown");
    }
}
