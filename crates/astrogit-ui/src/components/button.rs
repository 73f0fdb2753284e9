//! Button Components
//!
//! Button styles used on the card:
//! - Primary: copy action, indigo fill
//! - Share: social share action, blue fill
//! - Tab: tab switcher, highlighted when active

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main card action - indigo fill
    #[default]
    Primary,
    /// Share action - blue fill
    Share,
    /// Inactive tab
    Tab,
    /// Active tab
    TabActive,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Share => "btn-share",
            ButtonVariant::Tab => "btn-tab",
            ButtonVariant::TabActive => "btn-tab active",
        }
    }

    /// Tab variant for an active/inactive tab
    pub fn tab(active: bool) -> Self {
        if active {
            ButtonVariant::TabActive
        } else {
            ButtonVariant::Tab
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled card button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Share,
///         onclick: move |_| share(),
///         "Share on Twitter"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", variant.class(), extra),
        _ => variant.class().to_string(),
    }
}
