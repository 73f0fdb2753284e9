#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use astrogit_core::{CardConfig, Horoscope, HoroscopeCard};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Card loaded at startup, or the reason it could not be loaded
static LAUNCH_CARD: OnceLock<Result<HoroscopeCard, String>> = OnceLock::new();

/// Get the card prepared from the command line.
pub fn get_launch_card() -> Result<HoroscopeCard, String> {
    LAUNCH_CARD
        .get()
        .cloned()
        .unwrap_or_else(|| Err("No horoscope loaded".to_string()))
}

/// AstroGit - Your Coding Horoscope
#[derive(Parser, Debug)]
#[command(name = "astrogit-desktop")]
#[command(about = "AstroGit - Cosmic coding insights on your desktop")]
struct Args {
    /// Horoscope JSON file (default: a sample horoscope for today)
    #[arg(long)]
    horoscope: Option<PathBuf>,

    /// Name shown on the card
    #[arg(short, long)]
    username: Option<String>,

    /// Config file (default: <config dir>/astrogit/config.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_card(args: &Args) -> Result<HoroscopeCard> {
    let config = CardConfig::resolve(args.config.as_deref()).context("Failed to load config")?;
    let horoscope = match &args.horoscope {
        Some(path) => load_horoscope(path)?,
        None => Horoscope::sample(chrono::Local::now().date_naive()),
    };
    Ok(HoroscopeCard::new(horoscope, args.username.clone(), config))
}

fn load_horoscope(path: &Path) -> Result<Horoscope> {
    Horoscope::load(path).with_context(|| format!("Failed to load horoscope from {:?}", path))
}

fn main() {
    let args = Args::parse();

    astrogit_core::logging::setup_logging(args.verbose);

    let card = load_card(&args).map_err(|e| {
        tracing::error!("{:#}", e);
        format!("{:#}", e)
    });
    if let Ok(ref card) = card {
        tracing::info!("Showing horoscope for {} ({})", card.username(), card.formatted_date());
    }
    let _ = LAUNCH_CARD.set(card);

    // Window size: single card with room for the traits grid
    let window_width = 820.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("AstroGit - Coding Horoscope")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
