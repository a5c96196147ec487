use clap::Parser;
use std::path::PathBuf;

use crate::config::ValidatorConfig;
use crate::formatter::OutputFormat;

/// Line printed for any command-line misuse.
pub const USAGE: &str = "usage: yamlvalid <path-to-yaml>";

#[derive(Parser, Debug)]
#[command(name = "yamlvalid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate Kubernetes Pod manifests against a fixed schema")]
#[command(long_about = "Parses a YAML manifest (one or more documents) and checks every Pod against the schema: apiVersion, kind, metadata, os, containers, ports, probes and resources. Prints one line per violation and exits non-zero when any are found.")]
pub struct Cli {
    /// Path to the manifest to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Report files by the path given instead of their base name
    #[arg(long)]
    pub full_path: bool,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }

    /// Validator settings selected on the command line.
    pub fn config(&self) -> ValidatorConfig {
        ValidatorConfig::default()
            .with_format(self.format)
            .with_full_path(self.full_path)
    }
}
