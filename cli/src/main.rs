// scrollback — local chat transcript, persisted between runs
//
// Thin shell over scrollback-core: open a session against the sled
// database, mutate or print the transcript, exit.

mod config;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::*;
use config::Config;
use scrollback_core::{ChatMessage, ChatSession, Notifier, SledStorage};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "scrollback")]
#[command(about = "Scrollback — persistent chat transcript", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the transcript
    Show {
        /// Print at most this many of the latest messages
        #[arg(short, long)]
        limit: Option<usize>,
        /// Only messages from this sender
        #[arg(short, long)]
        sender: Option<String>,
    },
    /// Append a message to the transcript
    Send {
        message: String,
        #[arg(short, long, default_value = "user")]
        sender: String,
    },
    /// Delete the transcript (in memory and on disk)
    Clear,
    /// Configure settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Show where config and transcript data live
    Path,
}

#[derive(Subcommand)]
enum ConfigAction {
    Set { key: String, value: String },
    Get { key: String },
    List,
}

/// Renders core notifications as green terminal lines
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, text: &str) {
        println!("{} {}", "✓".green().bold(), text.green());
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { limit, sender } => cmd_show(limit, sender),
        Commands::Send { message, sender } => cmd_send(&sender, &message),
        Commands::Clear => cmd_clear(),
        Commands::Config { action } => cmd_config(action),
        Commands::Path => cmd_path(),
    }
}

fn open_session(config: &Config) -> Result<ChatSession> {
    let path = config.resolved_storage_path()?;
    let backend = SledStorage::open(&path)
        .map_err(|e| anyhow::anyhow!("Failed to open transcript database at {:?}: {}", path, e))?;

    Ok(ChatSession::open(
        Arc::new(backend),
        config.storage_key.clone(),
        Arc::new(TerminalNotifier),
    ))
}

fn cmd_show(limit: Option<usize>, sender: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let session = open_session(&config)?;

    let mut messages = session.messages();
    if let Some(who) = &sender {
        messages.retain(|m| m.sender() == Some(who.as_str()));
    }

    let limit = limit.unwrap_or(config.display_limit);
    let skip = messages.len().saturating_sub(limit);

    if messages.is_empty() {
        println!("{}", "No messages.".dimmed());
        return Ok(());
    }

    for msg in &messages[skip..] {
        let time = msg
            .timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S");
        let who = msg.sender().unwrap_or("?");
        let text = msg.text_content().unwrap_or("<no text>");

        let who = match who {
            "user" => who.cyan().bold(),
            "assistant" => who.magenta().bold(),
            other => other.normal().bold(),
        };
        println!("{} {} {}", time.to_string().dimmed(), who, text);
    }

    if skip > 0 {
        println!("{}", format!("({} older message(s) not shown)", skip).dimmed());
    }

    Ok(())
}

fn cmd_send(sender: &str, message: &str) -> Result<()> {
    let config = Config::load()?;
    let session = open_session(&config)?;

    session.update(|msgs| msgs.push(ChatMessage::text(sender, message)));
    println!("{} message appended", "✓".green().bold());

    Ok(())
}

fn cmd_clear() -> Result<()> {
    let config = Config::load()?;
    let session = open_session(&config)?;

    session.clear().context("Failed to clear transcript")?;
    Ok(())
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set_value(&key, &value)?;
            config.save()?;
            println!("{} {} = {}", "✓".green().bold(), key.bold(), value);
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get_value(&key) {
                Some(value) => println!("{}", value),
                None => println!("{}", "(unset)".dimmed()),
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("{} {}", "storage_path".bold(),
                config.storage_path.as_deref().unwrap_or("(default)"));
            println!("{} {}", "storage_key".bold(), config.storage_key);
            println!("{} {}", "display_limit".bold(), config.display_limit);
        }
    }
    Ok(())
}

fn cmd_path() -> Result<()> {
    let config = Config::load()?;
    println!("config:     {}", Config::config_file()?.display());
    println!("transcript: {}", config.resolved_storage_path()?.display());
    Ok(())
}
