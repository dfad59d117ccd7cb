use std::path::Path;

use serde::Deserialize;

pub const ENV_PREFIX: &str = "CPKIT";
pub const DEFAULT_CONFIG_FILE: &str = "cpkit";

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    pub display: DisplayConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Colorize statuses in table output.
    pub color: bool,
    /// Shorten identifiers to their first eight hex digits.
    pub short_ids: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Run invariant checks after decoding.
    pub consistency: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is unset.
    pub level: String,
    /// Emit log lines as JSON.
    pub json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig {
                color: true,
                short_ids: true,
            },
            validation: ValidationConfig { consistency: true },
            logging: LoggingConfig {
                level: "warn".into(),
                json: false,
            },
        }
    }
}

/// Load settings from an optional TOML file and `CPKIT__SECTION__KEY` environment variables.
///
/// An explicit `path` must exist; the default `./cpkit.toml` is optional.
pub fn load(path: Option<&Path>) -> anyhow::Result<CliConfig> {
    let defaults = CliConfig::default();
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };
    let env = config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true);

    let builder = config::Config::builder()
        .set_default("display.color", defaults.display.color)?
        .set_default("display.short_ids", defaults.display.short_ids)?
        .set_default("validation.consistency", defaults.validation.consistency)?
        .set_default("logging.level", defaults.logging.level)?
        .set_default("logging.json", defaults.logging.json)?
        .add_source(file)
        .add_source(env);

    let cfg = builder.build()?;
    let mut app: CliConfig = cfg.try_deserialize()?;
    app.logging.level = app.logging.level.trim().to_string();
    if app.logging.level.is_empty() {
        anyhow::bail!("logging.level cannot be empty");
    }
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::{env, panic, sync::Mutex};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_cli_env(vars: &[(&str, &str)], test: impl FnOnce() + panic::UnwindSafe) {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        let prefix = format!("{}__", ENV_PREFIX);

        let existing: Vec<(String, String)> = env::vars()
            .filter(|(key, _)| key.starts_with(&prefix))
            .collect();

        // SAFETY: tests touching the environment are serialized by ENV_LOCK.
        unsafe {
            for (key, _) in &existing {
                env::remove_var(key);
            }
            for (key, value) in vars {
                env::set_var(key, value);
            }
        }

        let result = panic::catch_unwind(test);

        unsafe {
            for (key, _) in vars {
                env::remove_var(key);
            }
            for (key, value) in existing {
                env::set_var(key, value);
            }
        }

        result.unwrap();
    }

    #[test]
    fn defaults_apply_without_sources() {
        with_cli_env(&[], || {
            let cfg = load(None).expect("load defaults");
            assert!(cfg.display.color);
            assert!(cfg.display.short_ids);
            assert!(cfg.validation.consistency);
            assert_eq!(cfg.logging.level, "warn");
            assert!(!cfg.logging.json);
        });
    }

    #[test]
    fn environment_overrides_defaults() {
        with_cli_env(
            &[
                ("CPKIT__DISPLAY__SHORT_IDS", "false"),
                ("CPKIT__LOGGING__LEVEL", " debug "),
            ],
            || {
                let cfg = load(None).expect("load with env");
                assert!(!cfg.display.short_ids);
                assert_eq!(cfg.logging.level, "debug");
            },
        );
    }

    #[test]
    fn file_values_are_read() {
        with_cli_env(&[], || {
            let mut file = tempfile::Builder::new()
                .suffix(".toml")
                .tempfile()
                .expect("temp file");
            writeln!(file, "[validation]\nconsistency = false\n[display]\ncolor = false")
                .expect("write config");
            let cfg = load(Some(file.path())).expect("load file");
            assert!(!cfg.validation.consistency);
            assert!(!cfg.display.color);
            assert!(cfg.display.short_ids);
        });
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        with_cli_env(&[], || {
            assert!(load(Some(Path::new("/nonexistent/cpkit.toml"))).is_err());
        });
    }
}
