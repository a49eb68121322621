//! Chat channel registry.
//!
//! Every logical channel a typed message can end up in is described by one
//! static `ChannelDef` record: the literal prefix that targets it, the keys
//! used to look up its colors and the slash count that selects it in the
//! default layout.

use crate::color::Rgb;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Logical chat channel a message can be delivered to.
///
/// Declaration order matches the game's chat-mode ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Public,
    Friend,
    Clan,
    Guest,
    GroupIronman,
}

/// Static per-channel constants.
#[derive(Debug)]
pub struct ChannelDef {
    /// Key suffix of the user-configured override color, if the channel has one
    pub override_key: Option<&'static str>,
    /// In-game color setting (varp) used with a transparent chatbox
    pub transparent_setting: u32,
    /// In-game color setting (varp) used with an opaque chatbox
    pub opaque_setting: u32,
    pub transparent_default: Rgb,
    pub opaque_default: Rgb,
    /// Literal prefix pattern, matched from the start of the typed text
    pub prefix_pattern: &'static str,
    /// Number of leading slashes selecting this channel without any remapping
    pub default_slash_count: usize,
}

const DEFS: [ChannelDef; 5] = [
    // Public
    ChannelDef {
        override_key: None,
        transparent_setting: 3000,
        opaque_setting: 2992,
        transparent_default: Rgb::new(0x9090FF),
        opaque_default: Rgb::new(0x0000FF),
        prefix_pattern: r"^/(@p|p )",
        default_slash_count: 0,
    },
    // Friend
    ChannelDef {
        override_key: Some("ClanChatMessage"),
        transparent_setting: 3004,
        opaque_setting: 2996,
        transparent_default: Rgb::new(0xEF5050),
        opaque_default: Rgb::new(0x7F0000),
        prefix_pattern: r"^/@?f",
        default_slash_count: 1,
    },
    // Clan
    ChannelDef {
        override_key: Some("ClanMessage"),
        transparent_setting: 3005,
        opaque_setting: 2997,
        transparent_default: Rgb::new(0x7F0000),
        opaque_default: Rgb::new(0x7F0000),
        prefix_pattern: r"^/(@c|c )",
        default_slash_count: 2,
    },
    // Guest
    ChannelDef {
        override_key: Some("ClanGuestMessage"),
        transparent_setting: 3061,
        opaque_setting: 3060,
        transparent_default: Rgb::new(0x7F0000),
        opaque_default: Rgb::new(0x7F0000),
        prefix_pattern: r"^/(@gc|gc )",
        default_slash_count: 3,
    },
    // GroupIronman
    ChannelDef {
        override_key: None,
        transparent_setting: 3192,
        opaque_setting: 3191,
        transparent_default: Rgb::new(0x7F0000),
        opaque_default: Rgb::new(0x7F0000),
        prefix_pattern: r"^/(@g[^c]|g )",
        default_slash_count: 4,
    },
];

/// Order in which prefix patterns are tried. More specific prefixes first,
/// since `/g` is a raw prefix of `/gc`.
const PREFIX_PRIORITY: [Channel; 5] = [
    Channel::Guest,
    Channel::GroupIronman,
    Channel::Clan,
    Channel::Friend,
    Channel::Public,
];

static PREFIX_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    Channel::ALL
        .iter()
        .map(|c| Regex::new(c.def().prefix_pattern).expect("static prefix pattern"))
        .collect()
});

impl Channel {
    /// All channels in declaration order.
    pub const ALL: [Channel; 5] = [
        Channel::Public,
        Channel::Friend,
        Channel::Clan,
        Channel::Guest,
        Channel::GroupIronman,
    ];

    pub fn def(self) -> &'static ChannelDef {
        &DEFS[self.index()]
    }

    /// Position in declaration order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Decode a chat-mode ordinal as stored by the game client.
    pub fn from_ordinal(ordinal: i32) -> Option<Channel> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Channel::ALL.get(i).copied())
    }

    pub fn override_key(self) -> Option<&'static str> {
        self.def().override_key
    }

    /// In-game color setting id for the given chatbox transparency.
    pub fn setting_id(self, transparent: bool) -> u32 {
        let def = self.def();
        if transparent {
            def.transparent_setting
        } else {
            def.opaque_setting
        }
    }

    /// Color used when neither an override nor an in-game setting exists.
    pub fn default_color(self, transparent: bool) -> Rgb {
        let def = self.def();
        if transparent {
            def.transparent_default
        } else {
            def.opaque_default
        }
    }

    pub fn default_slash_count(self) -> usize {
        self.def().default_slash_count
    }

    /// Whether `text` starts with this channel's literal prefix.
    pub fn matches_prefix(self, text: &str) -> bool {
        PREFIX_PATTERNS[self.index()].is_match(text)
    }

    /// Find the channel explicitly requested by a literal prefix.
    pub fn from_prefix(text: &str) -> Option<Channel> {
        PREFIX_PRIORITY
            .iter()
            .copied()
            .find(|c| c.matches_prefix(text))
    }

    /// Whether `id` is one of the in-game color settings of any channel.
    pub fn is_color_setting(id: u32) -> bool {
        DEFS.iter()
            .any(|d| d.transparent_setting == id || d.opaque_setting == id)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Public => "public",
            Channel::Friend => "friends chat",
            Channel::Clan => "clan",
            Channel::Guest => "guest clan",
            Channel::GroupIronman => "group ironman",
        };
        f.write_str(name)
    }
}
