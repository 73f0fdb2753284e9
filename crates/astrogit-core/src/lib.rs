//! AstroGit Core Library
//!
//! Model and actions behind the coding horoscope card.
//!
//! ## Overview
//!
//! A horoscope record (date, message, four trait scores) arrives from the
//! generation service. This crate normalizes the scores, derives the cosmic
//! score and captions, splits the message into paragraphs, and builds the
//! clipboard and share exports. Clipboard and browser access go through the
//! [`ClipboardWriter`] and [`LinkOpener`] traits so front ends can inject
//! real or in-memory implementations.
//!
//! ## Quick Start
//!
//! ```ignore
//! use astrogit_core::{CardConfig, CopiedIndicator, Horoscope, HoroscopeCard, SystemClipboard};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let horoscope = Horoscope::load("today.json".as_ref())?;
//!     let card = HoroscopeCard::new(horoscope, Some("Ada".into()), CardConfig::default());
//!
//!     println!("{} ({})", card.title(), card.formatted_date());
//!     for paragraph in card.paragraphs() {
//!         println!("{}", paragraph);
//!     }
//!
//!     let mut copied = CopiedIndicator::new(card.config().copied_hold());
//!     card.copy_to_clipboard(&SystemClipboard::new(), &mut copied)?;
//!     Ok(())
//! }
//! ```

pub mod card;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod horoscope;
pub mod logging;
pub mod message;
pub mod platform;
pub mod traits;

// Re-exports
pub use card::{HoroscopeCard, TabContent, TraitRow};
pub use config::CardConfig;
pub use display::{copy_button_label, CardTab, CopiedIndicator};
pub use error::{HoroscopeError, HoroscopeResult};
pub use horoscope::{format_long_date, Horoscope, TraitScores};
pub use message::{paragraphs, Paragraphs};
pub use platform::{
    ClipboardWriter, LinkOpener, MemoryClipboard, RecordingOpener, SystemBrowser, SystemClipboard,
};
pub use traits::{format_score, normalize_score, score_emoji, NormalizedTraits, Tier, TraitKind};
