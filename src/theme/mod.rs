//! Visual theme for AstroGit.

mod colors;
mod styles;

pub use colors::trait_styles;
pub use styles::GLOBAL_STYLES;
