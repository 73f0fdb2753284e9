//! Headless horoscope card.
//!
//! [`HoroscopeCard`] derives everything a front end shows (title, date,
//! cosmic score, paragraphs, trait rows) and performs the two export
//! actions through injected platform capabilities. The desktop component and
//! the CLI both render from it.

use crate::config::CardConfig;
use crate::display::{CardTab, CopiedIndicator};
use crate::error::HoroscopeResult;
use crate::export;
use crate::horoscope::Horoscope;
use crate::message::{paragraphs, Paragraphs};
use crate::platform::{ClipboardWriter, LinkOpener};
use crate::traits::{format_score, score_emoji, NormalizedTraits, TraitKind};

pub const CARD_KICKER: &str = "Cosmic Coding Insights";
pub const COSMIC_SCORE_LABEL: &str = "Cosmic Score";
pub const SHARE_BUTTON_LABEL: &str = "Share on Twitter";
pub const FOOTER_TAGLINE: &str = "The stars have aligned to reveal your coding destiny.";

/// One row of the traits tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitRow {
    pub kind: TraitKind,
    pub score: f64,
    /// "7" or "7.5"
    pub score_text: String,
    pub caption: &'static str,
    /// Bar width, 10..=100
    pub width_percent: f64,
}

/// What the body of the card shows for a tab.
#[derive(Debug, Clone, PartialEq)]
pub enum TabContent<'a> {
    Paragraphs(Vec<&'a str>),
    Traits(Vec<TraitRow>),
}

/// A horoscope ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct HoroscopeCard {
    horoscope: Horoscope,
    username: String,
    config: CardConfig,
    traits: NormalizedTraits,
}

impl HoroscopeCard {
    /// `username` falls back to the configured default name.
    pub fn new(horoscope: Horoscope, username: Option<String>, config: CardConfig) -> Self {
        let username = username
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| config.default_username.clone());
        let traits = horoscope.normalized_traits();

        Self {
            horoscope,
            username,
            config,
            traits,
        }
    }

    pub fn horoscope(&self) -> &Horoscope {
        &self.horoscope
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// "<name>'s Coding Destiny"
    pub fn title(&self) -> String {
        format!("{}'s Coding Destiny", self.username)
    }

    pub fn formatted_date(&self) -> String {
        self.horoscope.formatted_date()
    }

    pub fn traits(&self) -> &NormalizedTraits {
        &self.traits
    }

    pub fn cosmic_score(&self) -> f64 {
        self.traits.average()
    }

    pub fn cosmic_score_display(&self) -> String {
        self.traits.average_display()
    }

    pub fn cosmic_emoji(&self) -> &'static str {
        score_emoji(self.cosmic_score())
    }

    pub fn paragraphs(&self) -> Paragraphs<'_> {
        paragraphs(&self.horoscope.message)
    }

    pub fn trait_rows(&self) -> Vec<TraitRow> {
        self.traits
            .iter()
            .map(|(kind, score)| TraitRow {
                kind,
                score,
                score_text: format_score(score),
                caption: kind.caption(score),
                width_percent: score * 10.0,
            })
            .collect()
    }

    /// Body content for `tab`.
    pub fn tab_content(&self, tab: CardTab) -> TabContent<'_> {
        match tab {
            CardTab::Message => TabContent::Paragraphs(self.paragraphs().collect()),
            CardTab::Traits => TabContent::Traits(self.trait_rows()),
        }
    }

    /// "Generated by AstroGit"
    pub fn footer_attribution(&self) -> String {
        format!("Generated by {}", self.config.product_name)
    }

    pub fn clipboard_text(&self) -> String {
        export::clipboard_text(&self.horoscope, &self.config)
    }

    pub fn share_text(&self) -> String {
        export::share_text(&self.horoscope, &self.config)
    }

    pub fn share_url(&self) -> String {
        export::share_url(&self.horoscope, &self.config)
    }

    /// Write the clipboard summary and raise the copied indicator.
    ///
    /// A failed write is logged and returned; the indicator is left alone.
    pub fn copy_to_clipboard(
        &self,
        clipboard: &dyn ClipboardWriter,
        indicator: &mut CopiedIndicator,
    ) -> HoroscopeResult<()> {
        match clipboard.write_text(&self.clipboard_text()) {
            Ok(()) => {
                tracing::info!("Copied horoscope for {} to clipboard", self.username);
                indicator.mark_copied();
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to copy text: {}", e);
                Err(e)
            }
        }
    }

    /// Write the clipboard summary without a display indicator.
    pub fn write_clipboard(&self, clipboard: &dyn ClipboardWriter) -> HoroscopeResult<()> {
        clipboard.write_text(&self.clipboard_text()).map_err(|e| {
            tracing::error!("Failed to copy text: {}", e);
            e
        })
    }

    /// Open the share intent. Failures are logged and returned.
    pub fn share(&self, opener: &dyn LinkOpener) -> HoroscopeResult<()> {
        let url = self.share_url();
        tracing::info!("Opening share intent");
        tracing::debug!("Share URL: {}", url);
        opener.open_link(&url).map_err(|e| {
            tracing::warn!("Could not open share link: {}", e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::HoroscopeError;
    use crate::horoscope::TraitScores;
    use crate::platform::{MemoryClipboard, RecordingOpener};

    fn card() -> HoroscopeCard {
        let horoscope = Horoscope::new(
            "2025-03-05",
            "Hello. World.",
            TraitScores::new(5.0, 6.0, 7.0, 8.0),
        );
        HoroscopeCard::new(horoscope, None, CardConfig::default())
    }

    #[test]
    fn default_username() {
        let card = card();
        assert_eq!(card.username(), "Developer");
        assert_eq!(card.title(), "Developer's Coding Destiny");
    }

    #[test]
    fn blank_username_uses_default() {
        let card = HoroscopeCard::new(card().horoscope().clone(), Some("  ".into()), CardConfig::default());
        assert_eq!(card.username(), "Developer");

        let card = HoroscopeCard::new(card.horoscope().clone(), Some("Ada".into()), CardConfig::default());
        assert_eq!(card.title(), "Ada's Coding Destiny");
    }

    #[test]
    fn derived_values() {
        let card = card();
        assert_eq!(card.formatted_date(), "March 5, 2025");
        assert_eq!(card.cosmic_score(), 6.5);
        assert_eq!(card.cosmic_score_display(), "6.5");
        assert_eq!(card.cosmic_emoji(), "✨");
        assert_eq!(card.footer_attribution(), "Generated by AstroGit");
    }

    #[test]
    fn trait_rows_carry_captions_and_widths() {
        let rows = card().trait_rows();
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].kind, TraitKind::Energy);
        assert_eq!(rows[0].score_text, "5");
        assert_eq!(rows[0].caption, "Growing coding energy!");
        assert_eq!(rows[0].width_percent, 50.0);

        assert_eq!(rows[3].kind, TraitKind::Collaboration);
        assert_eq!(rows[3].caption, "Exceptional community builder!");
        assert_eq!(rows[3].width_percent, 80.0);
    }

    #[test]
    fn tab_toggle_is_reversible() {
        let card = card();
        let before = card.tab_content(CardTab::Message);
        let traits = card.tab_content(CardTab::Traits);
        let after = card.tab_content(CardTab::Message);

        assert_eq!(before, after);
        assert_eq!(before, TabContent::Paragraphs(vec!["Hello. ", "World."]));
        assert!(matches!(traits, TabContent::Traits(ref rows) if rows.len() == 4));
    }

    #[tokio::test(start_paused = true)]
    async fn copy_writes_text_and_raises_indicator() {
        let card = card();
        let clipboard = MemoryClipboard::new();
        let mut indicator = CopiedIndicator::new(card.config().copied_hold());

        card.copy_to_clipboard(&clipboard, &mut indicator).unwrap();

        assert_eq!(clipboard.contents(), Some(card.clipboard_text()));
        assert!(indicator.is_copied());

        tokio::time::sleep(Duration::from_millis(2001)).await;
        tokio::task::yield_now().await;
        assert!(!indicator.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_copy_leaves_indicator_off() {
        let card = card();
        let clipboard = MemoryClipboard::failing("no clipboard");
        let mut indicator = CopiedIndicator::new(card.config().copied_hold());

        let result = card.copy_to_clipboard(&clipboard, &mut indicator);

        assert!(matches!(result, Err(HoroscopeError::Clipboard(_))));
        assert!(!indicator.is_copied());
    }

    #[test]
    fn write_clipboard_without_indicator() {
        let card = card();
        let clipboard = MemoryClipboard::new();
        card.write_clipboard(&clipboard).unwrap();
        assert_eq!(clipboard.writes(), 1);
    }

    #[test]
    fn share_opens_intent_url() {
        let card = card();
        let opener = RecordingOpener::new();
        card.share(&opener).unwrap();
        assert_eq!(opener.opened(), vec![card.share_url()]);
    }

    #[test]
    fn repeated_share_is_independent() {
        let card = card();
        let opener = RecordingOpener::new();
        card.share(&opener).unwrap();
        card.share(&opener).unwrap();
        let opened = opener.opened();
        assert_eq!(opened.len(), 2);
        assert_eq!(opened[0], opened[1]);
    }
}
