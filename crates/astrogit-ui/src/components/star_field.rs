//! Star Field
//!
//! Decorative twinkling particles behind the card content.

use dioxus::prelude::*;
use rand::Rng;

/// One decorative star.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    /// Percent from the top
    pub top: f64,
    /// Percent from the left
    pub left: f64,
    /// Pulse duration in seconds, 3..8
    pub duration: f64,
    /// Pulse delay in seconds, 0..2
    pub delay: f64,
}

impl Star {
    pub fn style(&self) -> String {
        format!(
            "top: {:.2}%; left: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.top, self.left, self.duration, self.delay
        )
    }
}

/// Scatter `count` stars uniformly over the card.
pub fn scatter_stars<R: Rng>(count: usize, rng: &mut R) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            top: rng.random_range(0.0..100.0),
            left: rng.random_range(0.0..100.0),
            duration: 3.0 + rng.random_range(0.0..5.0),
            delay: rng.random_range(0.0..2.0),
        })
        .collect()
}

/// Absolutely positioned layer of pulsing stars.
///
/// Positions are chosen once per mount.
#[component]
pub fn StarField(#[props(default = 30)] count: usize) -> Element {
    let stars = use_hook(|| scatter_stars(count, &mut rand::rng()));

    rsx! {
        div { class: "star-field", "aria-hidden": "true",
            for (i, star) in stars.iter().enumerate() {
                div { key: "{i}", class: "star", style: "{star.style()}" }
            }
        }
    }
}
