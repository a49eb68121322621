//! Event-driven behaviour of the plugin against an in-memory host:
//! deferred initialization, redraw markup, live reconfiguration and colors.

use smartchat::host::ids;
use smartchat::{
    Channel, ChatPanel, EventResult, GameState, HostEvent, MemoryHost, PluginConfig, Redraw,
    SkipReason, SmartChatPlugin,
};

const PROMPT: HostEvent = HostEvent::ScriptPostFired {
    script_id: ids::SCRIPT_CHAT_PROMPT_INIT,
};

fn started() -> (SmartChatPlugin, MemoryHost) {
    let mut host = MemoryHost::logged_in("Zezima");
    host.varc_ints
        .insert(ids::VARC_OPEN_CHAT_PANEL, ChatPanel::All.client_int());
    let mut plugin = SmartChatPlugin::default();
    plugin.handle_event(&mut host, &HostEvent::Startup);
    plugin.handle_event(&mut host, &HostEvent::GameTick);
    (plugin, host)
}

fn type_and_redraw(plugin: &mut SmartChatPlugin, host: &mut MemoryHost, text: &str) -> EventResult {
    host.type_text(text);
    plugin.handle_event(host, &PROMPT)
}

fn recolored(channel: Channel) -> EventResult {
    EventResult::Redrawn(Redraw::Recolored(channel))
}

fn config_changed(group: &str, key: &str, value: Option<&str>) -> HostEvent {
    HostEvent::ConfigChanged {
        group: group.to_string(),
        key: key.to_string(),
        new_value: value.map(str::to_string),
    }
}

// ========== Initialization ==========

#[test]
fn nothing_happens_before_initialization() {
    let mut host = MemoryHost::logged_in("Zezima");
    let mut plugin = SmartChatPlugin::default();
    host.type_text("hello");

    assert_eq!(
        plugin.handle_event(&mut host, &PROMPT),
        EventResult::Redrawn(Redraw::Skipped(SkipReason::NotInitialized))
    );
    assert_eq!(host.input_widget.as_deref(), Some("Zezima: hello*"));
}

#[test]
fn login_initializes_on_next_tick() {
    let mut host = MemoryHost::new();
    let mut plugin = SmartChatPlugin::default();
    plugin.handle_event(&mut host, &HostEvent::Startup);
    assert_eq!(
        plugin.handle_event(&mut host, &HostEvent::GameTick),
        EventResult::Ignored
    );

    host = MemoryHost::logged_in("Zezima");
    plugin.handle_event(&mut host, &HostEvent::GameStateChanged(GameState::LoggedIn));
    assert!(plugin.tracker().snapshot(None).is_none());

    assert_eq!(
        plugin.handle_event(&mut host, &HostEvent::GameTick),
        recolored(Channel::Public)
    );
    assert!(plugin.tracker().snapshot(None).is_some());
    // Only the first tick initializes
    assert_eq!(
        plugin.handle_event(&mut host, &HostEvent::GameTick),
        EventResult::Ignored
    );
}

#[test]
fn world_hop_does_not_reinitialize() {
    let (mut plugin, mut host) = started();
    plugin.handle_event(&mut host, &HostEvent::GameStateChanged(GameState::Hopping));
    plugin.handle_event(&mut host, &HostEvent::GameStateChanged(GameState::LoggedIn));
    assert!(!plugin.tracker().is_initialization_pending());
}

#[test]
fn shutdown_forgets_state() {
    let (mut plugin, mut host) = started();
    plugin.handle_event(&mut host, &HostEvent::Shutdown);
    assert!(plugin.tracker().snapshot(None).is_none());
    assert!(plugin.colors().is_none());
    assert_eq!(
        type_and_redraw(&mut plugin, &mut host, "hi"),
        EventResult::Redrawn(Redraw::Skipped(SkipReason::NotInitialized))
    );

    // Restarting while logged in initializes again
    plugin.handle_event(&mut host, &HostEvent::Startup);
    plugin.handle_event(&mut host, &HostEvent::GameTick);
    assert_eq!(
        type_and_redraw(&mut plugin, &mut host, "hi"),
        recolored(Channel::Public)
    );
}

// ========== Redraw ==========

#[test]
fn redraw_writes_colored_markup() {
    let (mut plugin, mut host) = started();
    assert_eq!(
        type_and_redraw(&mut plugin, &mut host, "/c <b>hi"),
        recolored(Channel::Clan)
    );
    // Opaque clan default
    assert_eq!(
        host.input_widget.as_deref(),
        Some("Zezima: <col=7f0000>/c <lt>b<gt>hi*</col>")
    );
}

#[test]
fn other_scripts_do_not_redraw() {
    let (mut plugin, mut host) = started();
    host.type_text("hello");
    let event = HostEvent::ScriptPostFired { script_id: 1 };
    assert_eq!(plugin.handle_event(&mut host, &event), EventResult::Ignored);
    assert_eq!(host.input_widget.as_deref(), Some("Zezima: hello*"));
}

#[test]
fn locked_chat_is_left_alone() {
    let (mut plugin, mut host) = started();
    host.input_widget = Some("Zezima: Press Enter to Chat...".to_string());
    assert_eq!(
        plugin.handle_event(&mut host, &PROMPT),
        EventResult::Redrawn(Redraw::Skipped(SkipReason::ChatLocked))
    );
    assert_eq!(
        host.input_widget.as_deref(),
        Some("Zezima: Press Enter to Chat...")
    );
}

#[test]
fn missing_widget_is_skipped() {
    let (mut plugin, mut host) = started();
    host.input_widget = None;
    assert_eq!(
        plugin.handle_event(&mut host, &PROMPT),
        EventResult::Redrawn(Redraw::Skipped(SkipReason::NoInputWidget))
    );
}

#[test]
fn name_falls_back_to_local_player() {
    let (mut plugin, mut host) = started();
    host.typed_text = "hey".to_string();
    host.input_widget = Some("hey*".to_string());
    plugin.handle_event(&mut host, &PROMPT);
    assert_eq!(
        host.input_widget.as_deref(),
        Some("Zezima: <col=0000ff>hey*</col>")
    );

    host.local_player_name = None;
    host.input_widget = Some("hey*".to_string());
    assert_eq!(
        plugin.handle_event(&mut host, &PROMPT),
        EventResult::Redrawn(Redraw::Skipped(SkipReason::NoSpeakerName))
    );
}

// ========== State refresh ==========

#[test]
fn friends_chat_membership_changes_target() {
    let (mut plugin, mut host) = started();
    host.type_text("/hello");
    assert_eq!(
        plugin.handle_event(&mut host, &HostEvent::FriendsChatChanged { joined: true }),
        recolored(Channel::Friend)
    );
    assert_eq!(
        plugin.handle_event(&mut host, &HostEvent::FriendsChatChanged { joined: false }),
        recolored(Channel::Public)
    );
}

#[test]
fn open_panel_change_is_tracked() {
    let (mut plugin, mut host) = started();
    host.type_text("hello");
    host.varc_ints
        .insert(ids::VARC_OPEN_CHAT_PANEL, ChatPanel::Clan.client_int());
    let event = HostEvent::VarClientIntChanged {
        index: ids::VARC_OPEN_CHAT_PANEL,
    };
    assert_eq!(plugin.handle_event(&mut host, &event), recolored(Channel::Clan));
    assert_eq!(plugin.tracker().open_panel(), Some(ChatPanel::Clan));

    let unrelated = HostEvent::VarClientIntChanged { index: 7 };
    assert_eq!(plugin.handle_event(&mut host, &unrelated), EventResult::Ignored);
}

#[test]
fn account_type_change_is_tracked() {
    let (mut plugin, mut host) = started();
    host.type_text("//// hello");
    host.varbits.insert(ids::VARBIT_ACCOUNT_TYPE, 5);
    let event = HostEvent::VarbitChanged {
        varbit_id: Some(ids::VARBIT_ACCOUNT_TYPE),
        varp_id: 499,
    };
    assert_eq!(
        plugin.handle_event(&mut host, &event),
        recolored(Channel::GroupIronman)
    );
}

#[test]
fn active_chat_mode_does_not_override_tab() {
    let (mut plugin, mut host) = started();
    host.varc_ints
        .insert(ids::VARC_ACTIVE_CHAT_MODE, Channel::Clan.index() as i32);
    assert_eq!(
        type_and_redraw(&mut plugin, &mut host, "hello"),
        recolored(Channel::Public)
    );
}

// ========== Slash Swapper ==========

#[test]
fn slash_swapper_toggle_reconfigures_prefixes() {
    let (mut plugin, mut host) = started();
    host.type_text("/hello");

    host.set_plugin_enabled("Slash Swapper", true);
    let enabled = HostEvent::PluginChanged {
        name: "Slash Swapper".to_string(),
        enabled: true,
    };
    assert_eq!(plugin.handle_event(&mut host, &enabled), recolored(Channel::Clan));

    host.set_plugin_enabled("Slash Swapper", false);
    let disabled = HostEvent::PluginChanged {
        name: "Slash Swapper".to_string(),
        enabled: false,
    };
    assert_eq!(
        plugin.handle_event(&mut host, &disabled),
        recolored(Channel::Public)
    );

    let other = HostEvent::PluginChanged {
        name: "Chat Commands".to_string(),
        enabled: true,
    };
    assert_eq!(plugin.handle_event(&mut host, &other), EventResult::Ignored);
}

#[test]
fn slash_swapper_guest_chat_option_is_read_on_config_change() {
    let (mut plugin, mut host) = started();
    host.set_plugin_enabled("Slash Swapper", true);
    host.type_text("/hello");

    host.set_config("slashswapper", "slashGuestChat", "true");
    assert_eq!(
        plugin.handle_event(
            &mut host,
            &config_changed("slashswapper", "slashGuestChat", Some("true"))
        ),
        recolored(Channel::Guest)
    );
}

#[test]
fn bug_setting_toggles_emulation() {
    let mut host = MemoryHost::logged_in("Zezima");
    host.set_plugin_enabled("Slash Swapper", true);
    host.friends_chat = true;
    let mut plugin = SmartChatPlugin::default();
    plugin.handle_event(&mut host, &HostEvent::Startup);
    plugin.handle_event(&mut host, &HostEvent::GameTick);

    // Bug assumed by default: /// goes to friends chat
    assert_eq!(
        type_and_redraw(&mut plugin, &mut host, "/// hi"),
        recolored(Channel::Friend)
    );

    let event = config_changed("smartchatinputcolor", "slashSwapperBug", Some("false"));
    assert_eq!(plugin.handle_event(&mut host, &event), recolored(Channel::Guest));
    assert!(!plugin.config().base().slash_swapper_bug);

    let bogus = config_changed("smartchatinputcolor", "slashSwapperBug", Some("yes"));
    assert_eq!(plugin.handle_event(&mut host, &bogus), EventResult::Ignored);
}

#[test]
fn config_from_toml_disables_bug() {
    let config = PluginConfig::from_toml_str("slash_swapper_bug = false").unwrap();
    let mut host = MemoryHost::logged_in("Zezima");
    host.set_plugin_enabled("Slash Swapper", true);
    let mut plugin = SmartChatPlugin::new(config);
    plugin.handle_event(&mut host, &HostEvent::Startup);
    plugin.handle_event(&mut host, &HostEvent::GameTick);

    assert_eq!(
        type_and_redraw(&mut plugin, &mut host, "/// hi"),
        recolored(Channel::Guest)
    );
}

// ========== Colors ==========

#[test]
fn transparent_chatbox_uses_transparent_colors() {
    let (mut plugin, mut host) = started();
    host.resized = true;
    host.varbits.insert(ids::VARBIT_TRANSPARENT_CHATBOX, 1);
    host.type_text("hi");
    let event = HostEvent::VarbitChanged {
        varbit_id: Some(ids::VARBIT_TRANSPARENT_CHATBOX),
        varp_id: 1055,
    };
    assert_eq!(plugin.handle_event(&mut host, &event), recolored(Channel::Public));
    assert_eq!(
        host.input_widget.as_deref(),
        Some("Zezima: <col=9090ff>hi*</col>")
    );
}

#[test]
fn in_game_color_setting_is_offset() {
    let (mut plugin, mut host) = started();
    let setting = Channel::Clan.setting_id(false);
    host.varps.insert(setting, 0x00FF01);
    host.type_text("/c hi");
    let event = HostEvent::VarbitChanged {
        varbit_id: None,
        varp_id: setting,
    };
    assert_eq!(plugin.handle_event(&mut host, &event), recolored(Channel::Clan));
    assert_eq!(
        host.input_widget.as_deref(),
        Some("Zezima: <col=00ff00>/c hi*</col>")
    );
}

#[test]
fn override_color_wins() {
    let (mut plugin, mut host) = started();
    host.friends_chat = true;
    plugin.handle_event(&mut host, &HostEvent::FriendsChatChanged { joined: true });

    host.set_config("textrecolor", "opaqueClanChatMessage", "#ff00ff");
    host.type_text("/f hi");
    let event = config_changed("textrecolor", "opaqueClanChatMessage", Some("#ff00ff"));
    assert_eq!(plugin.handle_event(&mut host, &event), recolored(Channel::Friend));
    assert_eq!(
        host.input_widget.as_deref(),
        Some("Zezima: <col=ff00ff>/f hi*</col>")
    );

    // Unparsable overrides are ignored
    host.set_config("textrecolor", "opaqueClanChatMessage", "pink");
    plugin.handle_event(
        &mut host,
        &config_changed("textrecolor", "opaqueClanChatMessage", Some("pink")),
    );
    assert_eq!(
        plugin.colors().unwrap().get(Channel::Friend),
        Channel::Friend.default_color(false)
    );
}

#[test]
fn unrelated_events_are_ignored() {
    let (mut plugin, mut host) = started();
    let varbit = HostEvent::VarbitChanged {
        varbit_id: Some(1),
        varp_id: 2,
    };
    assert_eq!(plugin.handle_event(&mut host, &varbit), EventResult::Ignored);
    assert_eq!(
        plugin.handle_event(&mut host, &config_changed("runelite", "theme", None)),
        EventResult::Ignored
    );
}
