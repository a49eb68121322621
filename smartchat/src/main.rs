//! Interactive chat channel resolver
//!
//! Simulates a logged in client and prints, for each line read from stdin,
//! the channel the message would be sent to and the recolored input markup.
//!
//! Usage:
//!   cargo run -p smartchat -- --friends-chat --slash-swapper
//!   RUST_LOG=smartchat=trace cargo run -p smartchat -- --group-ironman --panel clan

use clap::{Parser, ValueEnum};
use smartchat::host::ids;
use smartchat::{
    ChatPanel, EventResult, HostEvent, MemoryHost, PluginConfig, Redraw, SmartChatPlugin,
};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Panel {
    All,
    Game,
    Public,
    Private,
    Channel,
    Clan,
    Trade,
}

impl From<Panel> for ChatPanel {
    fn from(panel: Panel) -> Self {
        match panel {
            Panel::All => ChatPanel::All,
            Panel::Game => ChatPanel::Game,
            Panel::Public => ChatPanel::Public,
            Panel::Private => ChatPanel::Private,
            Panel::Channel => ChatPanel::Channel,
            Panel::Clan => ChatPanel::Clan,
            Panel::Trade => ChatPanel::TradeOrGim,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "smartchat")]
#[command(about = "Show which chat channel typed messages would be sent to")]
struct Args {
    /// Plugin configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Player name shown in front of the input
    #[arg(long, default_value = "Player")]
    name: String,

    /// Simulate a group ironman account
    #[arg(long)]
    group_ironman: bool,

    /// Simulate being in a friends chat
    #[arg(long)]
    friends_chat: bool,

    /// Open chat tab
    #[arg(long, value_enum, default_value = "all")]
    panel: Panel,

    /// Simulate Slash Swapper being enabled
    #[arg(long)]
    slash_swapper: bool,

    /// Simulate Slash Swapper's swap guest chat option
    #[arg(long)]
    swap_guest_chat: bool,

    /// Simulate a transparent chatbox
    #[arg(long)]
    transparent: bool,
}

fn build_host(args: &Args, config: &PluginConfig) -> MemoryHost {
    let mut host = MemoryHost::logged_in(&args.name);
    host.friends_chat = args.friends_chat;
    host.resized = args.transparent;
    host.varbits
        .insert(ids::VARBIT_TRANSPARENT_CHATBOX, i32::from(args.transparent));
    host.varbits.insert(
        ids::VARBIT_ACCOUNT_TYPE,
        if args.group_ironman { 4 } else { 0 },
    );
    host.varc_ints.insert(
        ids::VARC_OPEN_CHAT_PANEL,
        ChatPanel::from(args.panel).client_int(),
    );
    host.set_plugin_enabled(&config.companion_plugin, args.slash_swapper);
    host.set_config(
        &config.companion_config_group,
        &config.companion_guest_chat_key,
        &args.swap_guest_chat.to_string(),
    );
    host
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PluginConfig::load_toml(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => PluginConfig::default(),
    };

    let mut host = build_host(&args, &config);
    let mut plugin = SmartChatPlugin::new(config);

    plugin.handle_event(&mut host, &HostEvent::Startup);
    plugin.handle_event(&mut host, &HostEvent::GameTick);

    println!("Type a chat message and press Enter. Ctrl+D to exit.");

    let redraw = HostEvent::ScriptPostFired {
        script_id: ids::SCRIPT_CHAT_PROMPT_INIT,
    };
    for line in io::stdin().lock().lines() {
        let line = line?;
        host.type_text(&line);

        match plugin.handle_event(&mut host, &redraw) {
            EventResult::Redrawn(Redraw::Recolored(channel)) => {
                println!("  → {}", channel);
                println!("    {}", host.input_widget.as_deref().unwrap_or_default());
            }
            EventResult::Redrawn(Redraw::Skipped(reason)) => {
                println!("  → skipped ({:?})", reason);
            }
            other => println!("  → {:?}", other),
        }
    }

    Ok(())
}
