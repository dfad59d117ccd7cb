use std::{env, fs, path::PathBuf, process::Command};

use chrono::{DateTime, SecondsFormat, Utc};

fn main() {
    write_version().expect("write version.rs");

    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rerun-if-env-changed=CPKIT_GIT_SHA");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs");
}

fn write_version() -> anyhow::Result<()> {
    let pkg_version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    let git_sha = env::var("CPKIT_GIT_SHA")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| git(&["rev-parse", "--short", "HEAD"]))
        .unwrap_or_else(|| "unknown".to_string());
    let git_dirty = git(&["status", "--porcelain"]).is_some_and(|out| !out.is_empty());
    let git_label = if git_sha != "unknown" && git_dirty {
        format!("{git_sha}-dirty")
    } else {
        git_sha
    };
    let long_version =
        format!("{pkg_version} (git {git_label}, dirty={git_dirty}, built {})", build_date());

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let contents = format!(
        "pub const VERSION: &str = \"{pkg_version}\";\n\
         pub const FULL_VERSION: &str = \"{long_version}\";\n"
    );
    fs::write(out_dir.join("version.rs"), contents)?;
    Ok(())
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Honors SOURCE_DATE_EPOCH for reproducible builds.
fn build_date() -> String {
    env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}
