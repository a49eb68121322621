//! Smart chat input color plugin.
//!
//! `SmartChatPlugin` keeps the cached client state and channel colors, and
//! reacts to host events. After every event that can change the target
//! channel or its color, the typed text is recolored in place.

use crate::config::PluginConfig;
use crate::events::{EventResult, HostEvent, Redraw, SkipReason};
use crate::host::{ids, Host};
use crate::markup;
use chatcolor_core::{resolve, Channel, ChannelColors, ChatPanel, Rgb, StateTracker};
use tracing::{debug, trace, warn};

/// Chat input recoloring plugin.
#[derive(Debug, Clone)]
pub struct SmartChatPlugin {
    config: PluginConfig,
    tracker: StateTracker,
    /// Channel colors, resolved on initialization
    colors: Option<ChannelColors>,
}

impl SmartChatPlugin {
    pub fn new(config: PluginConfig) -> Self {
        Self {
            config,
            tracker: StateTracker::new(),
            colors: None,
        }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn tracker(&self) -> &StateTracker {
        &self.tracker
    }

    pub fn colors(&self) -> Option<&ChannelColors> {
        self.colors.as_ref()
    }

    /// Process a host event and update plugin state.
    ///
    /// This is the only entry point the host adapter needs. Events arrive on
    /// the client thread one at a time, so state updates always land before
    /// the next redraw reads them.
    pub fn handle_event<H: Host>(&mut self, host: &mut H, event: &HostEvent) -> EventResult {
        match event {
            HostEvent::Startup => {
                debug!("smart chat input color starting");
                self.tracker.on_startup(host.game_state());
                EventResult::Updated
            }
            HostEvent::Shutdown => {
                debug!("smart chat input color stopping");
                self.tracker.reset();
                self.colors = None;
                EventResult::Updated
            }
            HostEvent::GameStateChanged(state) => {
                self.tracker.on_game_state(*state);
                EventResult::Updated
            }
            HostEvent::GameTick => {
                if !self.tracker.take_pending_init() {
                    return EventResult::Ignored;
                }
                self.initialize(host);
                self.redraw(host)
            }
            HostEvent::ScriptPostFired { script_id } => {
                if *script_id != ids::SCRIPT_CHAT_PROMPT_INIT {
                    return EventResult::Ignored;
                }
                self.redraw(host)
            }
            HostEvent::VarbitChanged { varbit_id, varp_id } => {
                match varbit_id {
                    Some(ids::VARBIT_TRANSPARENT_CHATBOX) => self.populate_colors(host),
                    Some(ids::VARBIT_ACCOUNT_TYPE) => self.refresh_group_ironman(host),
                    _ if Channel::is_color_setting(*varp_id) => self.populate_colors(host),
                    _ => return EventResult::Ignored,
                }
                self.redraw(host)
            }
            HostEvent::VarClientIntChanged { index } => {
                if *index != ids::VARC_OPEN_CHAT_PANEL {
                    return EventResult::Ignored;
                }
                self.refresh_open_panel(host);
                self.redraw(host)
            }
            HostEvent::ConfigChanged {
                group,
                key,
                new_value,
            } => self.on_config_changed(host, group, key, new_value.as_deref()),
            HostEvent::PluginChanged { name, enabled } => {
                if *name != self.config.companion_plugin {
                    return EventResult::Ignored;
                }
                self.configure_slash_swapper(host, *enabled);
                self.redraw(host)
            }
            HostEvent::FriendsChatChanged { joined } => {
                self.tracker.set_in_friends_chat(*joined);
                self.redraw(host)
            }
        }
    }

    fn on_config_changed<H: Host>(
        &mut self,
        host: &mut H,
        group: &str,
        key: &str,
        new_value: Option<&str>,
    ) -> EventResult {
        if group == self.config.config_group {
            if !self.config.apply_setting(key, new_value) {
                warn!(key, value = ?new_value, "ignoring unknown or invalid setting");
                return EventResult::Ignored;
            }
            self.configure_slash_prefixes(host);
            return self.redraw(host);
        }

        if group == self.config.companion_config_group {
            self.configure_slash_prefixes(host);
            return self.redraw(host);
        }

        if group == self.config.color_config_group {
            self.populate_colors(host);
            return self.redraw(host);
        }

        EventResult::Ignored
    }

    /// Read every piece of cached state from the host.
    fn initialize<H: Host>(&mut self, host: &H) {
        debug!("initializing chat input colors");
        self.refresh_open_panel(host);
        self.tracker.set_in_friends_chat(host.in_friends_chat());
        self.refresh_group_ironman(host);
        self.configure_slash_prefixes(host);
        self.populate_colors(host);
    }

    fn refresh_open_panel<H: Host>(&mut self, host: &H) {
        let panel = ChatPanel::from_client_int(host.varc_int(ids::VARC_OPEN_CHAT_PANEL));
        self.tracker.set_open_panel(panel);
    }

    fn refresh_group_ironman<H: Host>(&mut self, host: &H) {
        let account_type = host.varbit(ids::VARBIT_ACCOUNT_TYPE);
        // Group, hardcore group and unranked group ironman
        self.tracker.set_group_ironman(matches!(account_type, 4..=6));
    }

    /// Configure slash prefixes based on whether Slash Swapper is enabled.
    fn configure_slash_prefixes<H: Host>(&mut self, host: &H) {
        let enabled = host.is_plugin_enabled(&self.config.companion_plugin);
        self.configure_slash_swapper(host, enabled);
    }

    fn configure_slash_swapper<H: Host>(&mut self, host: &H, enabled: bool) {
        let guest_chat_swapped = host
            .config_value(
                &self.config.companion_config_group,
                &self.config.companion_guest_chat_key,
            )
            .and_then(|v| v.trim().parse::<bool>().ok())
            .unwrap_or(false);

        self.tracker.configure_slash_swapper(
            enabled,
            guest_chat_swapped,
            self.config.base().slash_swapper_bug,
        );
    }

    /// Resolve the color of every channel for the current chatbox mode.
    fn populate_colors<H: Host>(&mut self, host: &H) {
        let transparent =
            host.is_resized() && host.varbit(ids::VARBIT_TRANSPARENT_CHATBOX) == 1;
        let group = &self.config.color_config_group;

        let override_lookup = |key: &str| -> Option<Rgb> {
            let value = host.config_value(group, key)?;
            match value.parse::<Rgb>() {
                Ok(color) => Some(color),
                Err(e) => {
                    warn!(key, error = %e, "ignoring override color");
                    None
                }
            }
        };

        self.colors = Some(ChannelColors::resolve(
            transparent,
            override_lookup,
            |id| host.varp(id),
        ));
    }

    /// Channel the currently typed `text` would be sent to, or `None` before
    /// initialization.
    pub fn derive_channel<H: Host>(&self, host: &H, text: &str) -> Option<Channel> {
        let chat_mode = Channel::from_ordinal(host.varc_int(ids::VARC_ACTIVE_CHAT_MODE));
        let state = self.tracker.snapshot(chat_mode)?;
        Some(resolve(text, &state, self.tracker.slash_table()))
    }

    fn redraw<H: Host>(&self, host: &mut H) -> EventResult {
        let result = self.recolor_typed_text(host);
        if let Redraw::Skipped(reason) = result {
            trace!(?reason, "recolor skipped");
        }
        EventResult::Redrawn(result)
    }

    /// Recolor the typed text in the chat input by its target channel.
    pub fn recolor_typed_text<H: Host>(&self, host: &mut H) -> Redraw {
        let Some(input) = host.input_text() else {
            return Redraw::Skipped(SkipReason::NoInputWidget);
        };

        // Key remapping has locked the chat
        if input.ends_with(markup::LOCKED_CHAT_SUFFIX) {
            return Redraw::Skipped(SkipReason::ChatLocked);
        }

        let name = match markup::speaker_name(&input) {
            Some(name) => name.to_string(),
            None => match host.local_player_name() {
                Some(name) => name,
                None => return Redraw::Skipped(SkipReason::NoSpeakerName),
            },
        };

        let typed = host.typed_text();
        let (Some(channel), Some(colors)) = (self.derive_channel(host, &typed), &self.colors)
        else {
            return Redraw::Skipped(SkipReason::NotInitialized);
        };

        trace!(text = %typed, %channel, "recoloring chat input");
        host.set_input_text(&markup::input_line(&name, &typed, colors.get(channel)));
        Redraw::Recolored(channel)
    }
}

impl Default for SmartChatPlugin {
    fn default() -> Self {
        Self::new(PluginConfig::default())
    }
}
