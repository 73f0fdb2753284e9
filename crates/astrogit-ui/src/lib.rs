//! AstroGit UI Components
//!
//! Dioxus building blocks for the coding horoscope card, styled after the
//! cosmic gradient theme of the desktop app.
//!
//! ## Design Notes
//!
//! - **Indigo / purple gradients**: card surfaces and buttons
//! - **Per-trait accents**: yellow energy, pink charisma, purple creativity,
//!   blue collaboration
//! - **Star particles**: decorative, never interactive

pub mod components;

pub use components::*;
