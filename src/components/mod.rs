//! UI Components for AstroGit.
//!
//! App-level components wired to the platform context; the reusable
//! widgets live in `astrogit-ui`.

mod horoscope_card;
mod icons;

pub use horoscope_card::HoroscopeCardView;
