//! smartchat crate root
//!
//! Host-facing side of chat input recoloring: the `Host` trait the game client
//! implements, the `HostEvent`s it delivers, and `SmartChatPlugin`, which
//! combines them with the channel resolver from `chatcolor-core`.
//!
//! Public API exported here:
//! - `SmartChatPlugin` from `plugin`
//! - `Host`, `MemoryHost` from `host`
//! - `HostEvent`, `EventResult`, `Redraw`, `SkipReason` from `events`
//! - `PluginConfig` from `config`

pub mod config;
pub mod events;
pub mod host;
pub mod markup;
pub mod plugin;

// Re-export the core types callers need alongside the plugin.
pub use chatcolor_core::{
    resolve, Channel, ChannelColors, ChatPanel, ClientState, GameState, Rgb, SlashPrefixTable,
    SlashSwapperMode, StateTracker,
};

pub use config::PluginConfig;
pub use events::{EventResult, HostEvent, Redraw, SkipReason};
pub use host::{Host, MemoryHost};
pub use plugin::SmartChatPlugin;
