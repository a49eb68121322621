//! Session state tracking.
//!
//! The `StateTracker` caches the pieces of client state the resolver needs and
//! owns the slash prefix table. Each field is refreshed by its own update
//! function; the adapter calls them as host events arrive. Until every field
//! has been set once, no snapshot is available and recoloring is skipped.
//!
//! Initialization is two-phase: logging in only schedules it, and the first
//! game tick afterwards performs it, because some client variables are not
//! populated on the login frame itself.

use crate::channel::Channel;
use crate::resolver::{ChatPanel, ClientState, SlashSwapperMode};
use crate::slash_prefix::SlashPrefixTable;
use tracing::debug;

/// Connection state reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    LoginScreen,
    LoggingIn,
    Loading,
    LoggedIn,
    ConnectionLost,
    Hopping,
}

/// Cached client state plus the deferred initialization gate.
#[derive(Debug, Clone, Default)]
pub struct StateTracker {
    open_panel: Option<ChatPanel>,
    in_friends_chat: Option<bool>,
    group_ironman: Option<bool>,
    slash_swapper: Option<SlashSwapperMode>,
    slash_table: SlashPrefixTable,

    /// A world hop is in progress; its login must not reinitialize
    hopping_worlds: bool,
    /// Initialization runs on the next game tick
    should_initialize: bool,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Initialization gate ==========

    /// Plugin started. If already logged in, initialize on the next tick.
    pub fn on_startup(&mut self, game_state: GameState) {
        if game_state == GameState::LoggedIn {
            self.should_initialize = true;
        }
    }

    /// Track logins, ignoring the ones that finish a world hop.
    pub fn on_game_state(&mut self, game_state: GameState) {
        match game_state {
            GameState::Hopping => self.hopping_worlds = true,
            GameState::LoggedIn => {
                if self.hopping_worlds {
                    self.hopping_worlds = false;
                } else {
                    self.should_initialize = true;
                }
            }
            _ => {}
        }
    }

    /// Whether initialization is scheduled for the next tick.
    pub fn is_initialization_pending(&self) -> bool {
        self.should_initialize
    }

    /// Consume the scheduled initialization, returning whether one was due.
    pub fn take_pending_init(&mut self) -> bool {
        std::mem::take(&mut self.should_initialize)
    }

    // ========== State updates ==========

    pub fn set_open_panel(&mut self, panel: ChatPanel) {
        self.open_panel = Some(panel);
    }

    pub fn set_in_friends_chat(&mut self, in_friends_chat: bool) {
        self.in_friends_chat = Some(in_friends_chat);
    }

    pub fn set_group_ironman(&mut self, group_ironman: bool) {
        self.group_ironman = Some(group_ironman);
    }

    /// Rebuild the slash prefix table for the current Slash Swapper state.
    ///
    /// The bug is only emulated when Slash Swapper runs without its guest
    /// chat swap and `assume_bug` is set.
    pub fn configure_slash_swapper(
        &mut self,
        enabled: bool,
        guest_chat_swapped: bool,
        assume_bug: bool,
    ) {
        let mode = if enabled {
            self.slash_table.use_compatibility_layout(guest_chat_swapped);
            SlashSwapperMode::On {
                guest_chat_swapped,
                emulate_bug: !guest_chat_swapped && assume_bug,
            }
        } else {
            self.slash_table.use_default_layout();
            SlashSwapperMode::Off
        };

        debug!(?mode, "slash prefixes configured");
        self.slash_swapper = Some(mode);
    }

    /// Forget everything, as on plugin shutdown.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ========== Reads ==========

    pub fn open_panel(&self) -> Option<ChatPanel> {
        self.open_panel
    }

    pub fn slash_swapper(&self) -> Option<SlashSwapperMode> {
        self.slash_swapper
    }

    pub fn slash_table(&self) -> &SlashPrefixTable {
        &self.slash_table
    }

    /// Snapshot for the resolver, or `None` while any field is unknown.
    pub fn snapshot(&self, active_chat_mode: Option<Channel>) -> Option<ClientState> {
        Some(ClientState {
            group_ironman: self.group_ironman?,
            in_friends_chat: self.in_friends_chat?,
            slash_swapper: self.slash_swapper?,
            open_panel: self.open_panel?,
            active_chat_mode,
        })
    }
}
