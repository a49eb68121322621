//! Slash-count routing table.
//!
//! Typing one or more `/` in front of a message routes it to a channel
//! depending on how many slashes were typed. The Slash Swapper plugin remaps
//! these counts, so the table can be switched between two layouts.

use crate::channel::Channel;
use std::collections::HashMap;

/// Slash counts at or above this value are treated the same.
pub const MAX_SLASH_COUNT: usize = 4;

/// Mapping from number of leading slashes to the channel it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashPrefixTable {
    map: HashMap<usize, Channel>,
}

impl SlashPrefixTable {
    /// Create a table with the default layout.
    pub fn new() -> Self {
        let mut table = Self {
            map: HashMap::new(),
        };
        table.use_default_layout();
        table
    }

    /// Reset to the game's own slash prefixes.
    pub fn use_default_layout(&mut self) {
        self.map.clear();
        for channel in Channel::ALL {
            self.map.insert(channel.default_slash_count(), channel);
        }
        // Without slashes nothing is routed by counting
        self.map.remove(&0);
    }

    /// Use the prefixes Slash Swapper installs.
    ///
    /// `guest_chat_swapped` mirrors Slash Swapper's option that exchanges the
    /// clan and guest clan prefixes.
    pub fn use_compatibility_layout(&mut self, guest_chat_swapped: bool) {
        self.map.clear();
        self.map.insert(2, Channel::Friend);
        self.map.insert(4, Channel::GroupIronman);

        if guest_chat_swapped {
            self.map.insert(3, Channel::Clan);
            self.map.insert(1, Channel::Guest);
        } else {
            self.map.insert(1, Channel::Clan);
            self.map.insert(3, Channel::Guest);
        }
    }

    /// Channel selected by exactly `count` slashes, if any.
    pub fn by_slash_count(&self, count: usize) -> Option<Channel> {
        self.map.get(&count).copied()
    }

    /// Channel selected by the slashes `text` starts with, if any.
    pub fn by_slash_prefix(&self, text: &str) -> Option<Channel> {
        self.by_slash_count(count_leading_slashes(text))
    }
}

impl Default for SlashPrefixTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of leading `/` characters, capped at [`MAX_SLASH_COUNT`].
pub fn count_leading_slashes(text: &str) -> usize {
    text.chars()
        .take(MAX_SLASH_COUNT)
        .take_while(|&c| c == '/')
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_skips_public() {
        let table = SlashPrefixTable::new();
        assert_eq!(table.by_slash_count(0), None);
        assert_eq!(table.by_slash_count(1), Some(Channel::Friend));
        assert_eq!(table.by_slash_count(2), Some(Channel::Clan));
        assert_eq!(table.by_slash_count(3), Some(Channel::Guest));
        assert_eq!(table.by_slash_count(4), Some(Channel::GroupIronman));
    }

    #[test]
    fn compatibility_layout_variants() {
        let mut table = SlashPrefixTable::new();
        table.use_compatibility_layout(false);
        assert_eq!(table.by_slash_count(1), Some(Channel::Clan));
        assert_eq!(table.by_slash_count(2), Some(Channel::Friend));
        assert_eq!(table.by_slash_count(3), Some(Channel::Guest));
        assert_eq!(table.by_slash_count(4), Some(Channel::GroupIronman));

        table.use_compatibility_layout(true);
        assert_eq!(table.by_slash_count(1), Some(Channel::Guest));
        assert_eq!(table.by_slash_count(3), Some(Channel::Clan));
    }

    #[test]
    fn reconfiguring_replaces_every_entry() {
        let mut table = SlashPrefixTable::new();
        table.use_compatibility_layout(true);
        table.use_default_layout();
        assert_eq!(table, SlashPrefixTable::default());
    }

    #[test]
    fn slash_count_is_capped() {
        assert_eq!(count_leading_slashes("hello"), 0);
        assert_eq!(count_leading_slashes("/"), 1);
        assert_eq!(count_leading_slashes("// a/b"), 2);
        assert_eq!(count_leading_slashes("////"), 4);
        assert_eq!(count_leading_slashes("/////////x"), 4);

        let table = SlashPrefixTable::new();
        assert_eq!(
            table.by_slash_prefix("//////// test"),
            table.by_slash_prefix("//// test")
        );
    }
}
