//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve translations from YAML locale catalogs.
#[derive(Debug, Parser)]
#[command(name = "lingua", version, about)]
pub struct Cli {
    /// Configuration file (TOML or YAML).
    #[arg(short, long, env = "LINGUA_CONFIG", default_value = "lingua.toml")]
    pub config: PathBuf,

    /// Log filter overriding the configured level.
    #[arg(long)]
    pub log_level: Option<String>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a dotted path, e.g. `lingua translate greet name=Ada`.
    Translate {
        /// Dotted path without the locale prefix.
        path: String,

        /// Substitutions as `name=value`.
        #[arg(value_parser = parse_substitution)]
        args: Vec<(String, String)>,

        /// Locale to switch to before resolving.
        #[arg(long)]
        locale: Option<String>,

        /// Fallback locale to switch to before resolving; empty clears it.
        #[arg(long)]
        fallback: Option<String>,
    },

    /// List catalog keys.
    Keys {
        /// Only keys starting with this prefix.
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Translate a JSON file of validation errors.
    Errors {
        /// File holding `{"field": [{"code": "..."}]}`.
        file: PathBuf,

        /// Print JSON instead of one line per message.
        #[arg(long)]
        json: bool,
    },
}

/// Parse a `name=value` substitution argument.
pub fn parse_substitution(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{raw}'")),
    }
}
