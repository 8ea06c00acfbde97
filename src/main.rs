//! # hwbot — homework review status notifier
//!
//! Polls the homework review API and forwards status changes to a Telegram chat.
//!
//! Usage:
//!   hwbot                          # Poll forever (default config ~/.hwbot/config.toml)
//!   hwbot --config ./hwbot.toml    # Custom config file
//!   hwbot --once                   # Single poll, then exit
//!
//! Required environment (a `.env` file in the working directory is honoured):
//!   PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use hwbot_channels::TelegramChannel;
use hwbot_core::config::LogConfig;
use hwbot_core::{Credentials, HwBotConfig};
use hwbot_scheduler::{ApiPoller, Iteration, Notifier, PollingLoop};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(
    name = "hwbot",
    version,
    about = "Homework review status notifier for Telegram"
)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Run a single poll and exit
    #[arg(long)]
    once: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn expand_path(p: &str) -> String {
    shellexpand::tilde(p).to_string()
}

fn init_logging(config: &LogConfig, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let directives = ["hwbot", "hwbot_core", "hwbot_channels", "hwbot_scheduler"]
        .map(|target| format!("{target}={level}"))
        .join(",");

    let log_path = expand_path(&config.file);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {log_path}"))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives)))
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let config = match &cli.config {
        Some(path) => HwBotConfig::load_from(std::path::Path::new(&expand_path(path)))?,
        None => HwBotConfig::load()?,
    };
    init_logging(&config.log, cli.verbose)?;

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            let message = format!("No token. Bot operation stopped! {e}");
            tracing::error!("CRITICAL: {message}");
            anyhow::bail!(message);
        }
    };

    let channel = TelegramChannel::new(
        config.telegram.clone(),
        &credentials.telegram_token,
        &credentials.telegram_chat_id,
    )?;
    match channel.get_me().await {
        Ok(me) => tracing::info!(
            "Telegram bot: @{} ({})",
            me.username.as_deref().unwrap_or("unknown"),
            me.first_name
        ),
        Err(e) => tracing::warn!("Could not fetch Telegram bot info: {e}"),
    }

    let poller = ApiPoller::new(&config.practicum, &credentials.practicum_token)?;
    let mut bot = PollingLoop::new(
        poller,
        Notifier::new(channel),
        config.practicum.retry_period(),
    );

    if cli.once {
        match bot.run_once().await {
            Iteration::Sent(message) | Iteration::Unchanged(message) => println!("{message}"),
            Iteration::Failed { message, .. } => anyhow::bail!(message),
        }
        return Ok(());
    }

    bot.run().await;
    Ok(())
}
