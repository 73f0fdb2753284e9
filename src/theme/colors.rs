//! Trait accent colors.
//!
//! The rest of the palette lives as custom properties in `GLOBAL_STYLES`.

use astrogit_core::TraitKind;

// === TRAITS (bar gradient start, end) ===
pub const ENERGY: (&str, &str) = ("#facc15", "#ca8a04");
pub const CHARISMA: (&str, &str) = ("#f472b6", "#db2777");
pub const CREATIVITY: (&str, &str) = ("#c084fc", "#9333ea");
pub const COLLABORATION: (&str, &str) = ("#60a5fa", "#2563eb");

/// Gradient pair for a trait bar.
pub fn trait_gradient(kind: TraitKind) -> (&'static str, &'static str) {
    match kind {
        TraitKind::Energy => ENERGY,
        TraitKind::Charisma => CHARISMA,
        TraitKind::Creativity => CREATIVITY,
        TraitKind::Collaboration => COLLABORATION,
    }
}

/// Per-trait icon and bar colors.
pub fn trait_styles() -> String {
    TraitKind::ALL
        .iter()
        .map(|kind| {
            let (start, end) = trait_gradient(*kind);
            format!(
                ".{class} .trait-bar__icon {{ color: {start}; }}\n\
                 .{class} .trait-bar__fill {{ background: linear-gradient(to right, {start}, {end}); }}\n",
                class = kind.css_class(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_trait_gets_a_gradient() {
        let css = trait_styles();
        for kind in TraitKind::ALL {
            assert!(css.contains(&format!(".{} .trait-bar__fill", kind.css_class())));
        }
        assert!(css.contains("linear-gradient(to right, #facc15, #ca8a04)"));
    }
}
