//! Channel color resolution.
//!
//! A channel's color comes from, in order: a user override stored in the
//! chat color config group, the in-game color setting, or the channel's
//! built-in default for the current chatbox transparency.

use crate::channel::Channel;
use std::fmt;
use std::str::FromStr;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(u32);

impl Rgb {
    /// Build a color from an RGB integer. Anything above 24 bits is dropped.
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & 0xFF_FFFF)
    }

    /// Lowercase six digit hex code, as used in color tags.
    pub fn hex_code(self) -> String {
        format!("{:06x}", self.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Error returned when a stored color value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color value: {0:?}")]
pub struct ParseRgbError(String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    /// Accepts `#RRGGBB`, `#AARRGGBB` and decimal ARGB integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseRgbError(s.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            if (hex.len() != 6 && hex.len() != 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(err());
            }
            return u32::from_str_radix(hex, 16)
                .map(Rgb::new)
                .map_err(|_| err());
        }

        // ARGB with alpha set is stored as a negative i32
        s.parse::<i32>()
            .map(|v| v as u32)
            .or_else(|_| s.parse::<u32>())
            .map(Rgb::new)
            .map_err(|_| err())
    }
}

/// Config key of a channel's override color for the given transparency.
pub fn override_config_key(transparent: bool, key: &str) -> String {
    let variant = if transparent { "transparent" } else { "opaque" };
    format!("{}{}", variant, key)
}

/// Resolve the display color of `channel`.
///
/// `override_lookup` receives the full override config key (see
/// [`override_config_key`]); `setting_lookup` receives an in-game setting id
/// and returns its raw value.
pub fn color_for<O, S>(
    channel: Channel,
    transparent: bool,
    override_lookup: O,
    setting_lookup: S,
) -> Rgb
where
    O: Fn(&str) -> Option<Rgb>,
    S: Fn(u32) -> i32,
{
    if let Some(key) = channel.override_key() {
        if let Some(color) = override_lookup(&override_config_key(transparent, key)) {
            return color;
        }
    }

    let raw = setting_lookup(channel.setting_id(transparent));
    // Zero means the player never picked a color
    if raw == 0 {
        return channel.default_color(transparent);
    }

    // Stored values are offset by one
    Rgb::new(raw.wrapping_sub(1) as u32)
}

/// Resolved color of every channel for one chatbox transparency mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelColors {
    colors: [Rgb; 5],
}

impl ChannelColors {
    /// Resolve all channels at once.
    pub fn resolve<O, S>(transparent: bool, override_lookup: O, setting_lookup: S) -> Self
    where
        O: Fn(&str) -> Option<Rgb>,
        S: Fn(u32) -> i32,
    {
        let colors =
            Channel::ALL.map(|c| color_for(c, transparent, &override_lookup, &setting_lookup));
        Self { colors }
    }

    pub fn get(&self, channel: Channel) -> Rgb {
        self.colors[channel.index()]
    }
}
