use anyhow::Context;

use crate::args::{InspectArgs, OutputMode};
use crate::commands::CommandContext;
use crate::document::{Document, read_input};
use crate::view::{render_document, to_pretty_json, to_pretty_yaml};

pub fn handle_inspect(ctx: &CommandContext, args: InspectArgs) -> anyhow::Result<()> {
    let payload = read_input(args.input.file.as_deref())?;
    let document = Document::decode(args.input.kind, &payload)
        .with_context(|| format!("decode {} payload", args.input.kind.as_str()))?;

    match args.output.mode() {
        OutputMode::Json => println!("{}", to_pretty_json(&document)?),
        OutputMode::Yaml => print!("{}", to_pretty_yaml(&document)?),
        OutputMode::Table => {
            println!("{}", render_document(&document, &ctx.view_options(args.full_ids)));
            for issue in document.consistency_issues() {
                eprintln!("warning: {issue}");
            }
        }
    }
    Ok(())
}
