//! Channel resolution.
//!
//! Decides which channel a message would be delivered to if it were sent
//! right now. Resolution runs in four steps, first match wins:
//!
//! 1. a literal prefix such as `/c ` or `/@gc`,
//! 2. the number of leading slashes, looked up in the [`SlashPrefixTable`],
//! 3. redirection of channels the player cannot actually reach (friends chat
//!    without being in one, group ironman chat on a regular account),
//! 4. the channel implied by the open chat tab.

use crate::channel::Channel;
use crate::slash_prefix::{count_leading_slashes, SlashPrefixTable, MAX_SLASH_COUNT};

/// Chat tab currently open in the chatbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPanel {
    /// No tab, or a value the client does not document
    Unknown,
    All,
    Game,
    Public,
    Private,
    Channel,
    Clan,
    TradeOrGim,
}

impl ChatPanel {
    /// Decode the open-chat-panel client variable.
    pub fn from_client_int(value: i32) -> Self {
        match value {
            0 => ChatPanel::All,
            1 => ChatPanel::Game,
            2 => ChatPanel::Public,
            3 => ChatPanel::Private,
            4 => ChatPanel::Channel,
            5 => ChatPanel::Clan,
            6 => ChatPanel::TradeOrGim,
            _ => ChatPanel::Unknown,
        }
    }

    /// Value of the open-chat-panel client variable for this tab.
    pub fn client_int(self) -> i32 {
        match self {
            ChatPanel::Unknown => 1337,
            ChatPanel::All => 0,
            ChatPanel::Game => 1,
            ChatPanel::Public => 2,
            ChatPanel::Private => 3,
            ChatPanel::Channel => 4,
            ChatPanel::Clan => 5,
            ChatPanel::TradeOrGim => 6,
        }
    }
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::Unknown
    }
}

/// How the Slash Swapper plugin affects slash prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashSwapperMode {
    /// Slash Swapper disabled or not installed
    Off,
    On {
        /// Slash Swapper's "swap guest chat" option
        guest_chat_swapped: bool,
        /// Assume three slashes end up in friends chat instead of guest chat
        emulate_bug: bool,
    },
}

impl Default for SlashSwapperMode {
    fn default() -> Self {
        Self::Off
    }
}

/// Client state the resolver reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientState {
    pub group_ironman: bool,
    pub in_friends_chat: bool,
    pub slash_swapper: SlashSwapperMode,
    pub open_panel: ChatPanel,
    /// Chat mode selected in the client. Informational: the open tab decides
    /// the fallback channel, not this.
    pub active_chat_mode: Option<Channel>,
}

impl ClientState {
    pub fn compatibility_shim_active(&self) -> bool {
        matches!(self.slash_swapper, SlashSwapperMode::On { .. })
    }

    pub fn compatibility_bug_emulation(&self) -> bool {
        matches!(
            self.slash_swapper,
            SlashSwapperMode::On {
                emulate_bug: true,
                ..
            }
        )
    }
}

/// Channel a message starting with `text` would be delivered to.
pub fn resolve(text: &str, state: &ClientState, table: &SlashPrefixTable) -> Channel {
    requested_channel(text, state, table)
        .and_then(|channel| deliverable_channel(channel, text, state, table))
        .unwrap_or_else(|| panel_channel(state))
}

/// Channel explicitly asked for by a prefix or by slashes.
fn requested_channel(
    text: &str,
    state: &ClientState,
    table: &SlashPrefixTable,
) -> Option<Channel> {
    if let Some(channel) = Channel::from_prefix(text) {
        return Some(channel);
    }

    slash_channel(count_leading_slashes(text), state, table)
}

/// Slash table lookup, including the Slash Swapper guest chat bug.
fn slash_channel(count: usize, state: &ClientState, table: &SlashPrefixTable) -> Option<Channel> {
    match table.by_slash_count(count)? {
        Channel::Guest if state.compatibility_bug_emulation() => Some(Channel::Friend),
        channel => Some(channel),
    }
}

/// Where a message for `channel` really goes.
fn deliverable_channel(
    channel: Channel,
    text: &str,
    state: &ClientState,
    table: &SlashPrefixTable,
) -> Option<Channel> {
    match channel {
        Channel::Friend => Some(friend_channel(state)),
        Channel::GroupIronman => group_ironman_channel(text, state, table),
        other => Some(other),
    }
}

/// Friends chat messages go to public chat when not in a friends chat.
fn friend_channel(state: &ClientState) -> Channel {
    if state.in_friends_chat {
        Channel::Friend
    } else {
        Channel::Public
    }
}

/// Regular accounts have no group ironman chat; the game reroutes such
/// messages depending on how they were typed.
fn group_ironman_channel(
    text: &str,
    state: &ClientState,
    table: &SlashPrefixTable,
) -> Option<Channel> {
    if state.group_ironman {
        return Some(Channel::GroupIronman);
    }

    let reroute = |channel: Option<Channel>| -> Option<Channel> {
        match channel? {
            Channel::Friend => Some(friend_channel(state)),
            other => Some(other),
        }
    };

    if text.starts_with("/g") {
        return reroute(table.by_slash_count(1));
    }

    // Not explained by the game, but observed
    if text.starts_with("/@g") {
        return Some(Channel::Clan);
    }

    if count_leading_slashes(text) == MAX_SLASH_COUNT {
        return reroute(slash_channel(3, state, table));
    }

    // Only the three shapes above can request group ironman chat
    Some(Channel::GroupIronman)
}

/// Channel implied by the open chat tab.
fn panel_channel(state: &ClientState) -> Channel {
    match state.open_panel {
        ChatPanel::Channel => friend_channel(state),
        ChatPanel::Clan => Channel::Clan,
        ChatPanel::TradeOrGim if state.group_ironman => Channel::GroupIronman,
        _ => Channel::Public,
    }
}
