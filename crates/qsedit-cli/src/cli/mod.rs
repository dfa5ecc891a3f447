//! CLI for qsedit: edit the query string of a request URL.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qsedit_core::config::{self, EditorConfig};

use commands::{run_remove, run_set};

/// Top-level CLI for qsedit.
#[derive(Debug, Parser)]
#[command(name = "qsedit")]
#[command(about = "Remove or set query-string parameters on a URL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the URL with the given parameters removed.
    Remove {
        /// Request URL, absolute or relative (e.g. /items?page=2).
        url: String,
        /// Parameter names to remove (case-insensitive).
        #[arg(value_name = "KEY")]
        keys: Vec<String>,
    },

    /// Print the URL with the given parameters added or overwritten.
    Set {
        /// Request URL, absolute or relative (e.g. /items?page=2).
        url: String,
        /// Assignments; an empty value (KEY=) removes the parameter.
        #[arg(value_name = "KEY=VALUE")]
        assignments: Vec<String>,
        /// Keep the given key spelling instead of lower-casing it.
        #[arg(long)]
        no_lowercase: bool,
        /// Trim whitespace around values before storing them.
        #[arg(long)]
        trim_values: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let output = match cli.command {
            CliCommand::Remove { url, keys } => run_remove(&cfg, &url, &keys)?,
            CliCommand::Set {
                url,
                assignments,
                no_lowercase,
                trim_values,
            } => run_set(
                editor_config(cfg.editor, no_lowercase, trim_values),
                &url,
                &assignments,
            )?,
        };
        println!("{}", output);

        Ok(())
    }
}

/// Applies `set` flags on top of the config file. Unset flags leave it alone.
pub(crate) fn editor_config(
    cfg: EditorConfig,
    no_lowercase: bool,
    trim_values: bool,
) -> EditorConfig {
    let mut editor_cfg = cfg;
    if no_lowercase {
        editor_cfg.lowercase_set_keys = false;
    }
    if trim_values {
        editor_cfg.trim_values = true;
    }
    editor_cfg
}

#[cfg(test)]
mod tests;
