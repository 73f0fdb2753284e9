//! AstroGit CLI
//!
//! Thin wrapper around astrogit-core for reading horoscopes in the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Show the card (message and traits)
//! astrogit show today.json --username Ada
//!
//! # Show only the traits tab
//! astrogit show today.json --tab traits
//!
//! # Print the clipboard summary
//! astrogit export today.json
//!
//! # Copy the summary to the system clipboard
//! astrogit copy today.json
//!
//! # Print the share link instead of opening it
//! astrogit share today.json --dry-run
//!
//! # Read the horoscope from stdin
//! curl -s https://example.org/horoscope | astrogit show -
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use astrogit_core::card::{CARD_KICKER, COSMIC_SCORE_LABEL, FOOTER_TAGLINE};
use astrogit_core::{
    copy_button_label, CardConfig, CardTab, Horoscope, HoroscopeCard, SystemBrowser,
    SystemClipboard, TabContent, TraitRow,
};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// AstroGit - Coding Horoscopes
#[derive(Parser)]
#[command(name = "astrogit")]
#[command(version = "0.1.0")]
#[command(about = "AstroGit - Coding horoscopes in your terminal")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: <config dir>/astrogit/config.json if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the horoscope card
    Show {
        #[command(flatten)]
        card: CardArgs,

        /// Which tab to render
        #[arg(short, long, value_enum, default_value_t = TabChoice::All)]
        tab: TabChoice,
    },

    /// Print the clipboard summary
    Export {
        #[command(flatten)]
        card: CardArgs,
    },

    /// Copy the summary to the system clipboard
    Copy {
        #[command(flatten)]
        card: CardArgs,
    },

    /// Share the horoscope on Twitter
    Share {
        #[command(flatten)]
        card: CardArgs,

        /// Print the share link instead of opening a browser
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Args)]
struct CardArgs {
    /// Horoscope JSON file, or - for stdin
    file: String,

    /// Name shown on the card
    #[arg(short, long)]
    username: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum TabChoice {
    Message,
    Traits,
    All,
}

impl TabChoice {
    fn tabs(self) -> &'static [CardTab] {
        match self {
            TabChoice::Message => &[CardTab::Message],
            TabChoice::Traits => &[CardTab::Traits],
            TabChoice::All => &CardTab::ALL,
        }
    }
}

fn load_horoscope(file: &str) -> Result<Horoscope> {
    if file == "-" {
        Horoscope::from_reader(std::io::stdin().lock()).context("Failed to read horoscope from stdin")
    } else {
        Horoscope::load(file.as_ref()).with_context(|| format!("Failed to load horoscope from {}", file))
    }
}

fn build_card(args: &CardArgs, config: CardConfig) -> Result<HoroscopeCard> {
    let horoscope = load_horoscope(&args.file)?;
    Ok(HoroscopeCard::new(horoscope, args.username.clone(), config))
}

/// Ten-cell text bar for a 1..=10 score.
fn render_bar(score: f64) -> String {
    let filled = (score.round().clamp(0.0, 10.0)) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

fn render_trait(row: &TraitRow) -> String {
    format!(
        "  {} {:<14} {:>5}  {}  {}",
        row.kind.icon(),
        row.kind.label(),
        format!("{}/10", row.score_text),
        render_bar(row.score),
        row.caption
    )
}

/// The process exits right after copying, so the clipboard is served until replaced.
fn cli_clipboard() -> SystemClipboard {
    SystemClipboard::until_replaced()
}

fn render_card(card: &HoroscopeCard, tabs: &[CardTab]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", CARD_KICKER));
    out.push_str(&format!("{}\n", card.title()));
    out.push_str(&format!("{}\n", card.formatted_date()));
    out.push_str(&format!(
        "{}: {} {}\n",
        COSMIC_SCORE_LABEL,
        card.cosmic_score_display(),
        card.cosmic_emoji()
    ));

    for tab in tabs {
        out.push_str(&format!("\n── {} ──\n", tab.label()));
        match card.tab_content(*tab) {
            TabContent::Paragraphs(paragraphs) => {
                for paragraph in paragraphs {
                    out.push_str(&format!("  {}\n", paragraph.trim_end()));
                }
            }
            TabContent::Traits(rows) => {
                for row in &rows {
                    out.push_str(&render_trait(row));
                    out.push('\n');
                }
            }
        }
    }

    out.push_str(&format!("\n{} • {}\n", FOOTER_TAGLINE, card.footer_attribution()));
    out
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    astrogit_core::logging::setup_logging(cli.verbose);

    let config = CardConfig::resolve(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Show { card, tab } => {
            let card = build_card(&card, config)?;
            print!("{}", render_card(&card, tab.tabs()));
        }

        Commands::Export { card } => {
            let card = build_card(&card, config)?;
            println!("{}", card.clipboard_text());
        }

        Commands::Copy { card } => {
            let card = build_card(&card, config)?;
            let clipboard = cli_clipboard();
            if clipboard.waits_for_new_owner() {
                println!("Holding the clipboard until another application takes it...");
            }
            card.write_clipboard(&clipboard)
                .context("Failed to copy text")?;
            tracing::info!("Copied horoscope summary to clipboard");
            println!("{}", copy_button_label(true));
        }

        Commands::Share { card, dry_run } => {
            let card = build_card(&card, config)?;
            if dry_run {
                tracing::debug!("Dry run, not opening a browser");
                println!("{}", card.share_url());
            } else {
                card.share(&SystemBrowser).context("Failed to open share link")?;
                tracing::info!("Share link handed to the browser");
                println!("Opened share link:");
                println!("  {}", card.share_url());
            }
        }
    }

    Ok(())
}
