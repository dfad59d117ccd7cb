use ::common::Lifecycle;
use tracing::warn;

use crate::args::{
    ConfigurationTransitionArgs, ControlPlaneTarget, ControlPlaneTransitionArgs,
    TransitionCommands, REMOVED,
};

pub fn handle_transition(command: TransitionCommands) -> anyhow::Result<()> {
    let line = match command {
        TransitionCommands::ControlPlane(args) => check_control_plane(args)?,
        TransitionCommands::Configuration(args) => check_configuration(args)?,
    };
    println!("{line}");
    Ok(())
}

fn check_control_plane(args: ControlPlaneTransitionArgs) -> anyhow::Result<String> {
    let result = match args.to {
        ControlPlaneTarget::Status(next) => args
            .from
            .transition_to(next)
            .map(|next| format!("ok: {} -> {next}", args.from)),
        ControlPlaneTarget::Removed => args
            .from
            .remove()
            .map(|()| format!("ok: {} -> {REMOVED}", args.from)),
    };
    result.map_err(|err| {
        warn!(%err, "rejected control plane transition");
        err.into()
    })
}

fn check_configuration(args: ConfigurationTransitionArgs) -> anyhow::Result<String> {
    let next = args.from.transition_to(args.to).inspect_err(|err| {
        warn!(%err, "rejected configuration transition");
    })?;
    Ok(format!("ok: {} -> {next}", args.from))
}
