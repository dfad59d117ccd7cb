use crate::args::ValidateArgs;
use crate::commands::CommandContext;
use crate::document::read_input;
use crate::validate::{render_report, validate_payload};
use crate::view::to_pretty_json;

pub fn handle_validate(ctx: &CommandContext, args: ValidateArgs) -> anyhow::Result<()> {
    let payload = read_input(args.input.file.as_deref())?;
    let consistency = ctx.config.validation.consistency && !args.decode_only;
    let report = validate_payload(args.input.kind, &payload, consistency);

    if args.json {
        println!("{}", to_pretty_json(&report)?);
    } else {
        println!("{}", render_report(&report));
    }

    if !report.is_valid() {
        anyhow::bail!(
            "{} payload failed validation with {} issue(s)",
            report.kind,
            report.issues.len()
        );
    }
    Ok(())
}
