//! Host client interface.
//!
//! Everything the plugin reads from or writes to the game client goes through
//! the `Host` trait. `MemoryHost` is a plain in-memory implementation used by
//! the demo binary and the tests.

use chatcolor_core::GameState;
use std::collections::{HashMap, HashSet};

/// Ids of the client variables and scripts the plugin uses.
pub mod ids {
    /// Script run whenever the chat prompt is (re)drawn
    pub const SCRIPT_CHAT_PROMPT_INIT: u32 = 223;
    /// Varbit: 1 when the resizable chatbox is transparent
    pub const VARBIT_TRANSPARENT_CHATBOX: u32 = 4608;
    /// Varbit: account type, 4 to 6 are group ironman variants
    pub const VARBIT_ACCOUNT_TYPE: u32 = 1777;
    /// Client int: currently open chat panel
    pub const VARC_OPEN_CHAT_PANEL: u32 = 41;
    /// Client int: currently active chat mode
    pub const VARC_ACTIVE_CHAT_MODE: u32 = 945;
}

/// Read/write access to the game client.
///
/// Methods return plain values; anything the client may not have yet is an
/// `Option`.
pub trait Host {
    fn game_state(&self) -> GameState;

    /// Text of the chat input widget, or `None` if the widget does not exist.
    fn input_text(&self) -> Option<String>;

    /// Replace the displayed text of the chat input widget.
    fn set_input_text(&mut self, text: &str);

    /// Raw text the player has typed so far.
    fn typed_text(&self) -> String;

    /// Name of the logged in player; absent during login.
    fn local_player_name(&self) -> Option<String>;

    fn varp(&self, id: u32) -> i32;

    fn varbit(&self, id: u32) -> i32;

    fn varc_int(&self, index: u32) -> i32;

    /// Whether the client uses the resizable layout.
    fn is_resized(&self) -> bool;

    fn in_friends_chat(&self) -> bool;

    fn is_plugin_enabled(&self, name: &str) -> bool;

    /// Stored configuration value, if set.
    fn config_value(&self, group: &str, key: &str) -> Option<String>;
}

/// In-memory host with public fields.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    pub game_state: GameState,
    /// `None` means the chat input widget is not loaded
    pub input_widget: Option<String>,
    pub typed_text: String,
    pub local_player_name: Option<String>,
    pub varps: HashMap<u32, i32>,
    pub varbits: HashMap<u32, i32>,
    pub varc_ints: HashMap<u32, i32>,
    pub resized: bool,
    pub friends_chat: bool,
    pub enabled_plugins: HashSet<String>,
    pub config: HashMap<(String, String), String>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self {
            game_state: GameState::LoginScreen,
            input_widget: None,
            typed_text: String::new(),
            local_player_name: None,
            varps: HashMap::new(),
            varbits: HashMap::new(),
            varc_ints: HashMap::new(),
            resized: false,
            friends_chat: false,
            enabled_plugins: HashSet::new(),
            config: HashMap::new(),
        }
    }
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A logged in player with an empty chat input.
    pub fn logged_in(name: &str) -> Self {
        let mut host = Self {
            game_state: GameState::LoggedIn,
            local_player_name: Some(name.to_string()),
            ..Self::default()
        };
        host.type_text("");
        host
    }

    /// Simulate the player typing: the client shows the raw text followed by
    /// the unsent marker, uncolored.
    pub fn type_text(&mut self, text: &str) {
        let name = self.local_player_name.clone().unwrap_or_default();
        self.typed_text = text.to_string();
        self.input_widget = Some(format!("{}: {}*", name, text));
    }

    pub fn set_config(&mut self, group: &str, key: &str, value: &str) {
        self.config
            .insert((group.to_string(), key.to_string()), value.to_string());
    }

    pub fn remove_config(&mut self, group: &str, key: &str) {
        self.config.remove(&(group.to_string(), key.to_string()));
    }

    pub fn set_plugin_enabled(&mut self, name: &str, enabled: bool) {
        if enabled {
            self.enabled_plugins.insert(name.to_string());
        } else {
            self.enabled_plugins.remove(name);
        }
    }
}

impl Host for MemoryHost {
    fn game_state(&self) -> GameState {
        self.game_state
    }

    fn input_text(&self) -> Option<String> {
        self.input_widget.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input_widget = Some(text.to_string());
    }

    fn typed_text(&self) -> String {
        self.typed_text.clone()
    }

    fn local_player_name(&self) -> Option<String> {
        self.local_player_name.clone()
    }

    fn varp(&self, id: u32) -> i32 {
        self.varps.get(&id).copied().unwrap_or(0)
    }

    fn varbit(&self, id: u32) -> i32 {
        self.varbits.get(&id).copied().unwrap_or(0)
    }

    fn varc_int(&self, index: u32) -> i32 {
        self.varc_ints.get(&index).copied().unwrap_or(0)
    }

    fn is_resized(&self) -> bool {
        self.resized
    }

    fn in_friends_chat(&self) -> bool {
        self.friends_chat
    }

    fn is_plugin_enabled(&self, name: &str) -> bool {
        self.enabled_plugins.contains(name)
    }

    fn config_value(&self, group: &str, key: &str) -> Option<String> {
        self.config
            .get(&(group.to_string(), key.to_string()))
            .cloned()
    }
}
