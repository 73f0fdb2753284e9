//! Trait scores, tiers and captions.
//!
//! Every score shown on a card goes through [`normalize_score`], so anything
//! rendered is guaranteed to lie in `[MIN_SCORE, MAX_SCORE]`.

use crate::horoscope::TraitScores;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

/// Clamp a raw score into `[1, 10]`.
///
/// Absent, zero and NaN scores count as `1`.
pub fn normalize_score(raw: Option<f64>) -> f64 {
    let value = match raw {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => MIN_SCORE,
    };
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// Render a score without a trailing `.0` for whole numbers.
pub fn format_score(score: f64) -> String {
    format!("{}", score)
}

/// The four horoscope traits, in display order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum TraitKind {
    Energy,
    Charisma,
    Creativity,
    Collaboration,
}

impl TraitKind {
    pub const ALL: [TraitKind; 4] = [
        TraitKind::Energy,
        TraitKind::Charisma,
        TraitKind::Creativity,
        TraitKind::Collaboration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TraitKind::Energy => "Energy",
            TraitKind::Charisma => "Charisma",
            TraitKind::Creativity => "Creativity",
            TraitKind::Collaboration => "Collaboration",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TraitKind::Energy => "🚀",
            TraitKind::Charisma => "✨",
            TraitKind::Creativity => "🎨",
            TraitKind::Collaboration => "👥",
        }
    }

    /// CSS modifier used for the bar gradient
    pub fn css_class(&self) -> &'static str {
        match self {
            TraitKind::Energy => "trait-energy",
            TraitKind::Charisma => "trait-charisma",
            TraitKind::Creativity => "trait-creativity",
            TraitKind::Collaboration => "trait-collaboration",
        }
    }

    /// Encouragement line for a normalized score.
    pub fn caption(&self, score: f64) -> &'static str {
        let tier = Tier::from_score(score);
        match (self, tier) {
            (TraitKind::Energy, Tier::Stellar) => "Exceptional coding energy!",
            (TraitKind::Energy, Tier::Bright) => "Strong coding momentum!",
            (TraitKind::Energy, Tier::Rising) => "Growing coding energy!",
            (TraitKind::Energy, Tier::Budding) => "Budding coding potential!",

            (TraitKind::Charisma, Tier::Stellar) => "Magnetic code charisma!",
            (TraitKind::Charisma, Tier::Bright) => "Impressive code appeal!",
            (TraitKind::Charisma, Tier::Rising) => "Growing code influence!",
            (TraitKind::Charisma, Tier::Budding) => "Emerging code presence!",

            (TraitKind::Creativity, Tier::Stellar) => "Brilliant creative vision!",
            (TraitKind::Creativity, Tier::Bright) => "Impressive creative approach!",
            (TraitKind::Creativity, Tier::Rising) => "Growing creative insight!",
            (TraitKind::Creativity, Tier::Budding) => "Budding creative talent!",

            (TraitKind::Collaboration, Tier::Stellar) => "Exceptional community builder!",
            (TraitKind::Collaboration, Tier::Bright) => "Impressive connector!",
            (TraitKind::Collaboration, Tier::Rising) => "Growing network!",
            (TraitKind::Collaboration, Tier::Budding) => "Promising collaborator!",
        }
    }
}

/// Four-step ladder used for emojis and captions.
///
/// Thresholds are inclusive lower bounds: 8, 6, 4, below.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tier {
    Stellar,
    Bright,
    Rising,
    Budding,
}

impl Tier {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Tier::Stellar
        } else if score >= 6.0 {
            Tier::Bright
        } else if score >= 4.0 {
            Tier::Rising
        } else {
            Tier::Budding
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Tier::Stellar => "🌟",
            Tier::Bright => "✨",
            Tier::Rising => "💫",
            Tier::Budding => "⭐",
        }
    }
}

/// Emoji for any score.
pub fn score_emoji(score: f64) -> &'static str {
    Tier::from_score(score).emoji()
}

/// Trait scores after clamping.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NormalizedTraits {
    pub energy: f64,
    pub charisma: f64,
    pub creativity: f64,
    pub collaboration: f64,
}

impl NormalizedTraits {
    pub fn from_scores(scores: &TraitScores) -> Self {
        Self {
            energy: normalize_score(scores.energy),
            charisma: normalize_score(scores.charisma),
            creativity: normalize_score(scores.creativity),
            collaboration: normalize_score(scores.collaboration),
        }
    }

    pub fn get(&self, which: TraitKind) -> f64 {
        match which {
            TraitKind::Energy => self.energy,
            TraitKind::Charisma => self.charisma,
            TraitKind::Creativity => self.creativity,
            TraitKind::Collaboration => self.collaboration,
        }
    }

    /// The cosmic score: mean of the four traits.
    pub fn average(&self) -> f64 {
        (self.energy + self.charisma + self.creativity + self.collaboration) / 4.0
    }

    /// Cosmic score with one decimal, e.g. "7.5". Ties round up, so 5.25 shows as "5.3".
    pub fn average_display(&self) -> String {
        format!("{:.1}", (self.average() * 10.0).round() / 10.0)
    }

    /// Iterate traits in display order with their scores.
    pub fn iter(&self) -> impl Iterator<Item = (TraitKind, f64)> + '_ {
        TraitKind::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_defaults_and_clamps() {
        assert_eq!(normalize_score(None), 1.0);
        assert_eq!(normalize_score(Some(0.0)), 1.0);
        assert_eq!(normalize_score(Some(f64::NAN)), 1.0);
        assert_eq!(normalize_score(Some(-3.0)), 1.0);
        assert_eq!(normalize_score(Some(42.0)), 10.0);
        assert_eq!(normalize_score(Some(f64::INFINITY)), 10.0);
        assert_eq!(normalize_score(Some(6.5)), 6.5);
        assert_eq!(normalize_score(Some(0.5)), 1.0);
    }

    #[test]
    fn average_of_extremes() {
        let top = NormalizedTraits::from_scores(&TraitScores::new(10.0, 10.0, 10.0, 10.0));
        assert_eq!(top.average(), 10.0);
        assert_eq!(top.average_display(), "10.0");

        let bottom = NormalizedTraits::from_scores(&TraitScores::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(bottom.average(), 1.0);
        assert_eq!(bottom.average_display(), "1.0");
    }

    #[test]
    fn average_display_rounds_ties_up() {
        let low = NormalizedTraits::from_scores(&TraitScores::new(5.0, 5.0, 5.0, 6.0));
        assert_eq!(low.average(), 5.25);
        assert_eq!(low.average_display(), "5.3");

        let high = NormalizedTraits::from_scores(&TraitScores::new(7.0, 7.0, 7.0, 8.0));
        assert_eq!(high.average(), 7.25);
        assert_eq!(high.average_display(), "7.3");

        let three_quarters = NormalizedTraits::from_scores(&TraitScores::new(5.0, 6.0, 6.0, 6.0));
        assert_eq!(three_quarters.average_display(), "5.8");
    }

    #[test]
    fn average_uses_normalized_values() {
        let traits = NormalizedTraits::from_scores(&TraitScores {
            energy: Some(20.0),
            charisma: None,
            creativity: Some(5.0),
            collaboration: Some(6.0),
        });
        assert_eq!(traits.average(), 5.5);
        assert_eq!(traits.average_display(), "5.5");
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(score_emoji(10.0), "🌟");
        assert_eq!(score_emoji(8.0), "🌟");
        assert_eq!(score_emoji(7.9), "✨");
        assert_eq!(score_emoji(6.0), "✨");
        assert_eq!(score_emoji(5.99), "💫");
        assert_eq!(score_emoji(4.0), "💫");
        assert_eq!(score_emoji(3.9), "⭐");
        assert_eq!(score_emoji(1.0), "⭐");
    }

    #[test]
    fn captions_follow_ladder() {
        assert_eq!(TraitKind::Energy.caption(8.0), "Exceptional coding energy!");
        assert_eq!(TraitKind::Charisma.caption(6.0), "Impressive code appeal!");
        assert_eq!(TraitKind::Creativity.caption(4.0), "Growing creative insight!");
        assert_eq!(TraitKind::Collaboration.caption(3.0), "Promising collaborator!");
    }

    #[test]
    fn sixteen_distinct_captions() {
        let mut captions: Vec<&str> = TraitKind::ALL
            .iter()
            .flat_map(|t| [9.0, 7.0, 5.0, 2.0].map(|s| t.caption(s)))
            .collect();
        captions.sort();
        captions.dedup();
        assert_eq!(captions.len(), 16);
    }

    #[test]
    fn format_score_drops_trailing_zero() {
        assert_eq!(format_score(7.0), "7");
        assert_eq!(format_score(7.5), "7.5");
        assert_eq!(format_score(10.0), "10");
    }

    #[test]
    fn iter_is_in_display_order() {
        let traits = NormalizedTraits::from_scores(&TraitScores::new(2.0, 3.0, 4.0, 5.0));
        let order: Vec<(TraitKind, f64)> = traits.iter().collect();
        assert_eq!(
            order,
            vec![
                (TraitKind::Energy, 2.0),
                (TraitKind::Charisma, 3.0),
                (TraitKind::Creativity, 4.0),
                (TraitKind::Collaboration, 5.0),
            ]
        );
    }
}
