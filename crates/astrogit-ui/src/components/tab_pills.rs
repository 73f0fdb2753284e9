//! Tab Pills Component
//!
//! Horizontal tab switcher for the card body.

use astrogit_core::CardTab;
use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Properties for the TabPills component
#[derive(Clone, PartialEq, Props)]
pub struct TabPillsProps {
    /// Currently active tab
    pub active: CardTab,
    /// Handler called when a tab is selected
    pub on_select: EventHandler<CardTab>,
}

/// Row of tab buttons, one per [`CardTab`]
///
/// # Example
///
/// ```rust,ignore
/// let mut active = use_signal(CardTab::default);
///
/// rsx! {
///     TabPills {
///         active: active(),
///         on_select: move |tab| active.set(tab)
///     }
/// }
/// ```
#[component]
pub fn TabPills(props: TabPillsProps) -> Element {
    rsx! {
        div {
            class: "tab-pills",
            role: "tablist",
            for tab in CardTab::ALL {
                {
                    let is_active = props.active == tab;
                    let on_select = props.on_select;
                    rsx! {
                        Button {
                            key: "{tab.as_str()}",
                            variant: ButtonVariant::tab(is_active),
                            onclick: move |_| on_select.call(tab),
                            "{tab.label()}"
                        }
                    }
                }
            }
        }
    }
}
