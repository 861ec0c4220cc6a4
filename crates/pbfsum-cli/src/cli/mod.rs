//! CLI for pbfsum.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pbfsum_core::config;
use pbfsum_core::{verify, Verifier};
use std::path::PathBuf;

use commands::{run_checksum, run_parse, run_verify};

/// Top-level CLI for pbfsum.
#[derive(Debug, Parser)]
#[command(name = "pbfsum")]
#[command(about = "pbfsum: verify OSM PBF downloads against (gzipped) MD5 manifests", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Verify a data file against its MD5 manifest.
    Verify {
        /// Path to the downloaded data file.
        target: PathBuf,
        /// Manifest to check against (default: <target> plus the configured manifest suffix).
        #[arg(long, short = 'm', value_name = "PATH")]
        manifest: Option<PathBuf>,
    },

    /// Print the checksum and file name recorded in a manifest.
    Parse {
        /// Path to the manifest (plain or gzip-compressed).
        manifest: PathBuf,
    },

    /// Compute MD5 of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    /// Parse arguments, run the command and return the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        // The parser is chosen once here; every command goes through this verifier.
        let verifier = Verifier::from_config(&cfg);

        let ok = match cli.command {
            CliCommand::Verify { target, manifest } => {
                let manifest = manifest.unwrap_or_else(|| {
                    verify::default_manifest_path(&target, &cfg.manifest_suffix)
                });
                run_verify(&verifier, &target, &manifest)?
            }
            CliCommand::Parse { manifest } => {
                run_parse(&verifier, &manifest)?;
                true
            }
            CliCommand::Checksum { path } => {
                run_checksum(&path)?;
                true
            }
        };

        // Same convention as `md5sum -c`: 1 on mismatch.
        Ok(if ok { 0 } else { 1 })
    }
}

#[cfg(test)]
mod tests;
