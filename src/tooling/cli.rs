//! CLI Tooling
//!
//! Command-line surface for a synchronization run. Flags are folded over the
//! loaded configuration, so anything settable in `config.toml` can be switched
//! on from the command line.

use crate::config::{ConfigLoader, SyncConfig};
use crate::engine::synchronize;
use crate::error::SyncError;
use crate::format::{format_report_json, format_report_text, format_summary};
use crate::logging::LoggingConfig;
use crate::roots::RootSet;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// Output format for the run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Polysync CLI - converge two or more directories to the newest version of every file
#[derive(Debug, Parser)]
#[command(name = "polysync")]
#[command(about = "Converge two or more directories to the newest version of every file")]
pub struct Cli {
    /// Include dotfiles and dot-directories
    #[arg(short = 'a')]
    pub all: bool,

    /// Ignore files whose name matches GLOB (repeatable)
    #[arg(short = 'i', value_name = "GLOB", action = ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Dry run: report what would change without touching disk (implies -v)
    #[arg(short = 'n')]
    pub dry_run: bool,

    /// Only synchronize files whose name matches GLOB (repeatable)
    #[arg(short = 'o', value_name = "GLOB", action = ArgAction::Append)]
    pub only: Vec<String>,

    /// Copy permissions and modification time from the master to every copy
    #[arg(short = 'p')]
    pub preserve: bool,

    /// Recurse into subdirectories
    #[arg(short = 'r')]
    pub recursive: bool,

    /// Narrate every decision
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Directories to synchronize; earlier ones win modification-time ties
    #[arg(value_name = "DIR", num_args = 2.., required = true)]
    pub directories: Vec<PathBuf>,
}

impl Cli {
    /// Fold command-line flags over a loaded configuration.
    ///
    /// Switches only turn features on; patterns are appended. `--log-file`
    /// is kept apart so it can outrank `POLYSYNC_LOG_FILE`.
    pub fn apply_to(&self, config: &mut SyncConfig) {
        let sync = &mut config.sync;
        sync.include_hidden |= self.all;
        sync.dry_run |= self.dry_run;
        sync.preserve_metadata |= self.preserve;
        sync.recursive |= self.recursive;
        sync.verbose |= self.verbose;
        sync.ignore.extend(self.ignore.iter().cloned());
        sync.only.extend(self.only.iter().cloned());

        let logging = &mut config.logging;
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            logging.output = output.clone();
        }
    }
}

/// Resolved settings for one invocation.
pub struct CliContext {
    config: SyncConfig,
    format: OutputFormat,
    log_file: Option<PathBuf>,
}

impl CliContext {
    /// Load configuration and apply the command line over it.
    pub fn new(cli: &Cli) -> Result<Self, SyncError> {
        let mut config = ConfigLoader::load(cli.config.as_deref())?;
        cli.apply_to(&mut config);
        let mut context = Self::with_config(config, cli.format);
        context.log_file = cli.log_file.clone();
        Ok(context)
    }

    pub fn with_config(config: SyncConfig, format: OutputFormat) -> Self {
        Self {
            config,
            format,
            log_file: None,
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Log file named with `--log-file`, if any.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file.clone()
    }

    /// Logging settings with verbosity folded in.
    ///
    /// Verbose runs log at least at `info` so per-decision narration shows.
    pub fn logging_config(&self) -> LoggingConfig {
        let mut logging = self.config.logging.clone();
        if self.config.is_verbose()
            && !matches!(logging.level.as_str(), "info" | "debug" | "trace")
        {
            logging.level = "info".to_string();
        }
        logging
    }

    /// Validate the roots and run one synchronization.
    pub fn execute(&self, directories: &[PathBuf]) -> Result<String, SyncError> {
        let roots = RootSet::new(directories)?;
        let filter = self.config.filter()?;
        let options = self.config.options();
        info!(
            roots = roots.len(),
            recursive = options.recursive,
            dry_run = options.dry_run,
            preserve_metadata = options.preserve_metadata,
            "Starting synchronization"
        );

        let report = synchronize(&roots, options, filter)?;

        match self.format {
            OutputFormat::Json => format_report_json(&report)
                .map_err(|e| SyncError::Internal(format!("Failed to encode report: {}", e))),
            OutputFormat::Text if self.config.is_verbose() => Ok(format_report_text(&report)),
            OutputFormat::Text => Ok(format_summary(&report)),
        }
    }
}
