//! Terminal shell for the element-combination game.
//!
//! The shell owns no game rules. It resolves typed names against the element
//! catalog, only forwards unlocked elements to the engine, and renders a
//! [`view_model::Frame`] after each command.

pub mod command;
pub mod config;
pub mod logging;
pub mod message;
pub mod session;
pub mod shell;
pub mod view_model;

pub use command::{Command, CommandError};
pub use config::{ClientConfig, UiConfig};
pub use session::Session;

use alchemy_content::{Content, ContentFactory};
use anyhow::Result;

/// Loads content from the configured data directory, or the built-in content.
pub fn load_content(config: &ClientConfig) -> Result<Content> {
    match &config.data_dir {
        Some(dir) => ContentFactory::new(dir).load_all(),
        None => {
            tracing::debug!("No data directory configured, using built-in content");
            Ok(Content::builtin())
        }
    }
}
