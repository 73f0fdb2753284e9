//! Horoscope Card
//!
//! The styled coding horoscope: header with date and cosmic score, a
//! message/traits tab body, and copy/share actions.

use astrogit_core::card::{CARD_KICKER, FOOTER_TAGLINE, SHARE_BUTTON_LABEL};
use astrogit_core::{copy_button_label, CardTab, CopiedIndicator, HoroscopeCard, TabContent};
use astrogit_ui::{Button, ButtonVariant, CosmicScoreBadge, StarField, TabPills, TraitGrid};
use dioxus::prelude::*;

use super::icons::{ClipboardIcon, ShareIcon};
use crate::context::use_platform;

/// Horoscope card bound to the host clipboard and browser.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     HoroscopeCardView { card: HoroscopeCard::new(horoscope, None, CardConfig::default()) }
/// }
/// ```
#[component]
pub fn HoroscopeCardView(card: HoroscopeCard) -> Element {
    let platform = use_platform();
    let mut active_tab = use_signal(CardTab::default);
    let mut copied = use_signal(|| false);

    // Dropped with the component, which aborts a pending reset
    let hold = card.config().copied_hold();
    let mut indicator = use_signal(|| CopiedIndicator::new(hold));

    // Mirror the indicator into a render signal
    use_future(move || async move {
        let mut rx = indicator.peek().subscribe();
        while rx.changed().await.is_ok() {
            let value = *rx.borrow_and_update();
            copied.set(value);
        }
    });

    let copy_card = card.clone();
    let clipboard = platform.clipboard.clone();
    let on_copy = move |_| {
        // synchronous write; failures are logged by the card
        let _ = copy_card.copy_to_clipboard(clipboard.as_ref(), &mut indicator.write());
    };

    let share_card = card.clone();
    let opener = platform.opener.clone();
    let on_share = move |_| {
        // failures are logged by the card
        let _ = share_card.share(opener.as_ref());
    };

    let title = card.title();
    let date = card.formatted_date();
    let footer = card.footer_attribution();
    let copy_label = copy_button_label(copied());
    let copy_class = if copied() { "copied" } else { "" };

    rsx! {
        div { class: "horoscope-card-wrap",
            div { class: "horoscope-card",
                StarField {}

                div { class: "horoscope-card__content",
                    div { class: "horoscope-card__header",
                        div { class: "horoscope-card__heading",
                            div { class: "horoscope-card__kicker", "{CARD_KICKER}" }
                            h2 { class: "horoscope-card__title", "{title}" }
                            div { class: "horoscope-card__date", "{date}" }
                        }
                        CosmicScoreBadge {
                            score: card.cosmic_score_display(),
                            emoji: card.cosmic_emoji(),
                        }
                    }

                    div { class: "horoscope-card__body",
                        TabPills {
                            active: active_tab(),
                            on_select: move |tab| active_tab.set(tab),
                        }
                        {match card.tab_content(active_tab()) {
                            TabContent::Paragraphs(paragraphs) => rsx! {
                                div { class: "message-paragraphs",
                                    for (i, paragraph) in paragraphs.into_iter().enumerate() {
                                        p { key: "{i}", class: "message-paragraph", "{paragraph}" }
                                    }
                                }
                            },
                            TabContent::Traits(rows) => rsx! {
                                TraitGrid { rows }
                            },
                        }}
                    }

                    div { class: "horoscope-card__actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            class: copy_class.to_string(),
                            onclick: on_copy,
                            ClipboardIcon {}
                            "{copy_label}"
                        }
                        Button {
                            variant: ButtonVariant::Share,
                            onclick: on_share,
                            ShareIcon {}
                            "{SHARE_BUTTON_LABEL}"
                        }
                    }

                    div { class: "horoscope-card__footer",
                        span { "{FOOTER_TAGLINE}" }
                        span { class: "horoscope-card__footer-sep", " • " }
                        span { "{footer}" }
                    }
                }
            }
        }
    }
}
