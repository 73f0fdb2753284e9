//! Reusable card widgets
//!
//! Class names match the global stylesheet shipped by the desktop app.

mod button;
mod cosmic_score;
mod star_field;
mod tab_pills;
mod trait_bar;

pub use button::*;
pub use cosmic_score::*;
pub use star_field::*;
pub use tab_pills::*;
pub use trait_bar::*;
