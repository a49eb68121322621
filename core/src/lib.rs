//! chatcolor-core
//!
//! Channel resolution shared by chat input recoloring front-ends: given the
//! text a player is typing and a snapshot of client state, decide which chat
//! channel the message would be delivered to and which color that channel
//! is displayed in.
//!
//! Public API:
//! - `Channel` - The five logical chat channels and their static constants
//! - `SlashPrefixTable` - Slash count → channel routing, default or Slash Swapper layout
//! - `resolve` - The channel resolution decision function
//! - `color_for` / `ChannelColors` - Channel color lookup
//! - `StateTracker` - Cached client state and deferred initialization
//! - `Config` - User-facing settings
use serde::{Deserialize, Serialize};

pub mod channel;
pub use channel::{Channel, ChannelDef};

pub mod slash_prefix;
pub use slash_prefix::{count_leading_slashes, SlashPrefixTable, MAX_SLASH_COUNT};

pub mod resolver;
pub use resolver::{resolve, ChatPanel, ClientState, SlashSwapperMode};

pub mod color;
pub use color::{color_for, override_config_key, ChannelColors, ParseRgbError, Rgb};

pub mod tracker;
pub use tracker::{GameState, StateTracker};

/// User-facing settings of the channel resolver.
///
/// Front-ends flatten this into their own config type and add the
/// host-specific options next to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Assume messages starting with `///` end up in friends chat while
    /// Slash Swapper is active without its guest chat swap.
    pub slash_swapper_bug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slash_swapper_bug: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
