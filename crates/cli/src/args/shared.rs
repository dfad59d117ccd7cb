use std::path::PathBuf;

use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Args)]
pub struct OutputFormatArgs {
    /// Emit JSON instead of a table.
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,
    /// Emit YAML instead of a table.
    #[arg(long, conflicts_with = "json")]
    pub yaml: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
    Yaml,
}

impl OutputFormatArgs {
    pub fn mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.yaml {
            OutputMode::Yaml
        } else {
            OutputMode::Table
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Kind of resource the payload holds.
    #[arg(value_enum)]
    pub kind: ResourceKind,
    /// Payload file; `-` or omitted reads stdin.
    pub file: Option<PathBuf>,
}

/// Resource shapes accepted on input.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "kebab-case")]
pub enum ResourceKind {
    ControlPlane,
    Configuration,
    Response,
    List,
    CreateParams,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::ControlPlane => "control-plane",
            ResourceKind::Configuration => "configuration",
            ResourceKind::Response => "response",
            ResourceKind::List => "list",
            ResourceKind::CreateParams => "create-params",
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "lowercase")]
pub enum CompletionShell {
    Bash,
    Fish,
    Zsh,
}
