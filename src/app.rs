use dioxus::prelude::*;

use crate::components::HoroscopeCardView;
use crate::context::{get_launch_card, Platform};
use crate::theme::{trait_styles, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles, platform context, and the horoscope card.
#[component]
pub fn App() -> Element {
    use_context_provider(Platform::system);
    let card = use_hook(get_launch_card);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {trait_styles()} }
        main { class: "app-shell",
            {match card {
                Ok(card) => rsx! {
                    HoroscopeCardView { card }
                },
                Err(reason) => rsx! {
                    div { class: "load-error",
                        h2 { "The stars are clouded" }
                        p { "{reason}" }
                    }
                },
            }}
        }
    }
}
