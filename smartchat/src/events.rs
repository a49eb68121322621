//! Events delivered by the host client.
//!
//! The host owns event subscription; its adapter translates each callback
//! into one `HostEvent` and hands it to `SmartChatPlugin::handle_event`.

use chatcolor_core::GameState;

/// Host event the plugin reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Plugin enabled
    Startup,
    /// Plugin disabled
    Shutdown,
    GameStateChanged(GameState),
    GameTick,
    /// A client script finished running
    ScriptPostFired { script_id: u32 },
    /// A varp changed; `varbit_id` is set when the change was to one of
    /// the varbits packed into it
    VarbitChanged { varbit_id: Option<u32>, varp_id: u32 },
    /// A client-side integer variable changed
    VarClientIntChanged { index: u32 },
    /// A configuration value changed; `new_value` is `None` when unset
    ConfigChanged {
        group: String,
        key: String,
        new_value: Option<String>,
    },
    /// Another plugin was enabled or disabled
    PluginChanged { name: String, enabled: bool },
    /// The player joined or left a friends chat
    FriendsChatChanged { joined: bool },
}

/// Outcome of a recolor attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Input text rewritten in the color of this channel
    Recolored(chatcolor_core::Channel),
    /// Nothing written
    Skipped(SkipReason),
}

/// Why a recolor was skipped. None of these are errors; the next event
/// retries with fresh host state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The chat input widget does not exist
    NoInputWidget,
    /// Chat is locked behind "Press Enter to Chat..."
    ChatLocked,
    /// No speaker name in the widget and no local player name
    NoSpeakerName,
    /// Client state has not been read yet
    NotInitialized,
}

/// Result of handling one host event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event not relevant to the plugin
    Ignored,
    /// Cached state changed, no redraw needed
    Updated,
    /// A redraw was attempted
    Redrawn(Redraw),
}
