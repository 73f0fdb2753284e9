//! Cosmic Score Badge
//!
//! Rounded badge with the averaged score and its tier emoji.

use astrogit_core::card::COSMIC_SCORE_LABEL;
use dioxus::prelude::*;

#[component]
pub fn CosmicScoreBadge(
    /// Score with one decimal, e.g. "7.5"
    score: String,
    /// Tier emoji for the score
    emoji: &'static str,
) -> Element {
    let (first, second) = COSMIC_SCORE_LABEL
        .split_once(' ')
        .unwrap_or((COSMIC_SCORE_LABEL, ""));

    rsx! {
        div { class: "cosmic-score",
            span { class: "cosmic-score__value", "{score}" }
            div { class: "cosmic-score__orb",
                div { class: "cosmic-score__ping" }
                div { class: "cosmic-score__emoji", "{emoji}" }
            }
            span { class: "cosmic-score__label",
                "{first}"
                br {}
                "{second}"
            }
        }
    }
}
