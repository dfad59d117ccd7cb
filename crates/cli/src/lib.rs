pub mod args;
pub mod commands;
pub mod config;
pub mod document;
pub mod telemetry;
pub mod validate;
mod version;
pub mod view;

pub use args::*;
pub use commands::CommandContext;
pub use document::Document;
pub use validate::*;

use clap::Parser;

use crate::commands::completions::generate_completions;
use crate::commands::inspect::handle_inspect;
use crate::commands::schema::handle_schema;
use crate::commands::transition::handle_transition;
use crate::commands::validate::handle_validate;
use crate::config::CliConfig;

/// Shared entrypoint used by the CLI binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.globals.config.as_deref())?;
    telemetry::init_tracing(&cfg.logging);
    run_parsed(cli, cfg)
}

/// Execute the CLI given a pre-parsed argument struct and loaded settings.
pub fn run_parsed(cli: Cli, cfg: CliConfig) -> anyhow::Result<()> {
    let ctx = CommandContext::new(cfg, cli.globals.no_color);

    match cli.command {
        Commands::Inspect(args) => handle_inspect(&ctx, args)?,
        Commands::Validate(args) => handle_validate(&ctx, args)?,
        Commands::Transition { command } => handle_transition(command)?,
        Commands::Schema => handle_schema()?,
        Commands::Completions { shell } => generate_completions(shell),
    }

    Ok(())
}
