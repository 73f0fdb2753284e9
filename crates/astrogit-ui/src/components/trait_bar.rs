//! Trait Bar Component
//!
//! One trait of the traits tab: icon, label, score, progress bar, caption.

use astrogit_core::TraitRow;
use dioxus::prelude::*;

/// Inline style for the bar fill
pub fn bar_fill_style(width_percent: f64) -> String {
    format!("width: {}%;", width_percent.clamp(0.0, 100.0))
}

/// Renders a single trait row
///
/// # Design Notes
///
/// - Fill gradient comes from the per-trait CSS class
/// - Width is `score * 10` percent
/// - A pulsing highlight overlays the fill
#[component]
pub fn TraitBar(row: TraitRow) -> Element {
    let kind = row.kind;
    let fill_style = bar_fill_style(row.width_percent);

    rsx! {
        div { class: "trait-bar {kind.css_class()}",
            div { class: "trait-bar__header",
                p { class: "trait-bar__name",
                    span { class: "trait-bar__icon", "{kind.icon()}" }
                    span { "{kind.label()}" }
                }
                p { class: "trait-bar__score", "{row.score_text}/10" }
            }
            div { class: "trait-bar__track",
                div { class: "trait-bar__fill", style: "{fill_style}",
                    div { class: "trait-bar__shine" }
                }
            }
            p { class: "trait-bar__caption", "{row.caption}" }
        }
    }
}

/// Grid of all four trait bars
#[component]
pub fn TraitGrid(rows: Vec<TraitRow>) -> Element {
    rsx! {
        div { class: "trait-grid",
            for row in rows {
                TraitBar { key: "{row.kind.label()}", row: row.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_style_uses_percent() {
        assert_eq!(bar_fill_style(50.0), "width: 50%;");
        assert_eq!(bar_fill_style(75.0), "width: 75%;");
    }

    #[test]
    fn fill_style_is_bounded() {
        assert_eq!(bar_fill_style(250.0), "width: 100%;");
        assert_eq!(bar_fill_style(-5.0), "width: 0%;");
    }
}
