use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use shortpath_plugin::{
    LogConfig, Plugin, PluginConfig, PluginId, ShortNameFallback, ShortPathPlugin, StringTable,
    logging, validate_plugins,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FallbackArg {
    Fail,
    Original,
}

impl From<FallbackArg> for ShortNameFallback {
    fn from(arg: FallbackArg) -> Self {
        match arg {
            FallbackArg::Fail => ShortNameFallback::Fail,
            FallbackArg::Original => ShortNameFallback::OriginalPath,
        }
    }
}

/// Print the short (8.3) path of files and folders
#[derive(Debug, Parser)]
#[command(name = "shortpath", version)]
struct Cli {
    /// Config file (defaults to ~/.pathcopy/shortpath.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// What to print when no short path exists
    #[arg(long, value_enum)]
    fallback: Option<FallbackArg>,

    /// Print one JSON object per path
    #[arg(long)]
    json: bool,

    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
struct PathReport {
    plugin: PluginId,
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl PathReport {
    fn failed(&self) -> bool {
        self.error.is_some()
    }
}

/// The command-line flag wins over the config file
fn effective_fallback(arg: Option<FallbackArg>, config: &PluginConfig) -> ShortNameFallback {
    arg.map(Into::into).unwrap_or(config.fallback)
}

fn shorten_paths(plugin: &dyn Plugin, paths: &[PathBuf]) -> Vec<PathReport> {
    paths
        .iter()
        .map(|path| {
            let result = plugin.get_path(path);
            if let Err(e) = &result {
                tracing::warn!(target: "main", path = %path.display(), error = %e, "Failed to shorten path");
            }
            PathReport {
                plugin: plugin.id(),
                input: path.display().to_string(),
                output: result.as_ref().ok().map(|p| p.display().to_string()),
                error: result.as_ref().err().map(|e| e.to_string()),
            }
        })
        .collect()
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PluginConfig::load_from_path(path),
        None => PluginConfig::load(),
    }
    .context("Failed to load configuration")?;

    let _log_guard = logging::init_logging(LogConfig::from_plugin_config(&config)?)
        .context("Failed to initialize logging system")?;

    let plugin = ShortPathPlugin::new().with_fallback(effective_fallback(cli.fallback, &config));
    let texts = StringTable::builtin();

    validate_plugins(&[&plugin], &texts).context("Plugin failed its start-up self-test")?;
    tracing::debug!(target: "main", plugin = %plugin.id(), fallback = ?plugin.fallback(), "Plugin loaded");

    if !cli.json {
        eprintln!("{}", plugin.description(&texts)?);
    }

    let reports = shorten_paths(&plugin, &cli.paths);
    for report in &reports {
        if cli.json {
            println!("{}", serde_json::to_string(report)?);
        } else {
            match (&report.output, &report.error) {
                (Some(output), _) => println!("{}", output),
                (None, error) => eprintln!("{}: {}", report.input, error.as_deref().unwrap_or_default()),
            }
        }
    }

    Ok(if reports.iter().any(PathReport::failed) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
