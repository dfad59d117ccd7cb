use chrono::Utc;

use crate::config::CliConfig;
use crate::view::ViewOptions;

pub mod completions;
pub mod inspect;
pub mod schema;
pub mod transition;
pub mod validate;

#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: CliConfig,
    pub colorize: bool,
}

impl CommandContext {
    pub fn new(config: CliConfig, no_color: bool) -> Self {
        let colorize = config.display.color && !no_color;
        Self { config, colorize }
    }

    pub fn view_options(&self, full_ids: bool) -> ViewOptions {
        ViewOptions {
            short_ids: self.config.display.short_ids && !full_ids,
            colorize: self.colorize,
            now: Utc::now(),
        }
    }
}
