use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::version;

pub mod shared;
pub mod transition;

pub use shared::*;
pub use transition::*;

#[derive(Debug, Parser)]
#[command(
    name = "cpkit",
    version = version::VERSION,
    long_version = version::FULL_VERSION,
    about = "cpkit - inspect and validate managed control plane API payloads"
)]
pub struct Cli {
    #[command(flatten)]
    pub globals: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Settings file (TOML); defaults to ./cpkit.toml when present.
    #[arg(long, env = "CPKIT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Disable ANSI colors in table output.
    #[arg(long, env = "CPKIT_NO_COLOR", global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode a payload and render it (table, JSON or YAML).
    Inspect(InspectArgs),
    /// Decode a payload and run consistency checks; exits non-zero on any issue.
    Validate(ValidateArgs),
    /// Check a status transition against the lifecycle tables.
    Transition {
        #[command(subcommand)]
        command: TransitionCommands,
    },
    /// Print the OpenAPI component schemas of the resource model.
    Schema,
    /// Generate shell completions for the CLI.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Show full identifiers instead of the short form.
    #[arg(long)]
    pub full_ids: bool,
    /// Output format for structured output (JSON/YAML); defaults to table.
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Only check that the payload decodes; skip consistency checks.
    #[arg(long)]
    pub decode_only: bool,
    /// Emit the report as JSON.
    #[arg(long)]
    pub json: bool,
}
