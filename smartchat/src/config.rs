use serde::{Deserialize, Serialize};

/// Key of the bug emulation setting inside this plugin's config group.
pub const SLASH_SWAPPER_BUG_KEY: &str = "slashSwapperBug";

/// Plugin configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All options from `chatcolor_core::Config` (flattened via serde)
/// - The config group the host stores this plugin's settings under
/// - How to find the Slash Swapper plugin and its guest chat option
/// - The config group holding user override colors
///
/// # Example
///
/// ```rust
/// use smartchat::PluginConfig;
///
/// let config = PluginConfig::default();
/// assert!(config.base().slash_swapper_bug);
/// assert_eq!(config.companion_plugin, "Slash Swapper");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PluginConfig {
    #[serde(flatten)]
    pub base: chatcolor_core::Config,

    /// Config group of this plugin's own settings
    pub config_group: String,

    /// Display name of the Slash Swapper plugin
    pub companion_plugin: String,
    /// Config group of the Slash Swapper plugin
    pub companion_config_group: String,
    /// Slash Swapper's "swap guest chat" option
    pub companion_guest_chat_key: String,

    /// Config group of the user's chat color overrides
    pub color_config_group: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            base: chatcolor_core::Config::default(),
            config_group: "smartchatinputcolor".to_string(),
            companion_plugin: "Slash Swapper".to_string(),
            companion_config_group: "slashswapper".to_string(),
            companion_guest_chat_key: "slashGuestChat".to_string(),
            color_config_group: "textrecolor".to_string(),
        }
    }
}

impl PluginConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &chatcolor_core::Config {
        &self.base
    }

    /// Apply a changed value of one of this plugin's own settings.
    ///
    /// Returns `false` for unknown keys or unparsable values.
    pub fn apply_setting(&mut self, key: &str, value: Option<&str>) -> bool {
        match key {
            SLASH_SWAPPER_BUG_KEY => {
                // Unset means back to default
                let value = match value {
                    None => chatcolor_core::Config::default().slash_swapper_bug,
                    Some(v) => match v.trim().parse::<bool>() {
                        Ok(b) => b,
                        Err(_) => return false,
                    },
                };
                self.base.slash_swapper_bug = value;
                true
            }
            _ => false,
        }
    }
}
