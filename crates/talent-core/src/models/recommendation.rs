use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Hiring recommendation tier derived from a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Recommendation {
    #[serde(rename = "STRONG MATCH")]
    StrongMatch,
    #[serde(rename = "GOOD MATCH")]
    GoodMatch,
    #[serde(rename = "MODERATE MATCH")]
    ModerateMatch,
    #[serde(rename = "WEAK MATCH")]
    WeakMatch,
    #[serde(rename = "POOR MATCH")]
    PoorMatch,
}

/// Descending lower bounds; the first bound the score reaches wins.
const TIERS: [(f64, Recommendation); 4] = [
    (8.0, Recommendation::StrongMatch),
    (7.0, Recommendation::GoodMatch),
    (6.0, Recommendation::ModerateMatch),
    (5.0, Recommendation::WeakMatch),
];

impl Recommendation {
    /// Tier for a final score on the 0–10 scale.
    pub fn from_score(final_score: f64) -> Self {
        TIERS
            .iter()
            .find(|(min, _)| final_score >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(Self::PoorMatch)
    }

    /// Upper-case tier label, e.g. "STRONG MATCH".
    pub fn label(self) -> &'static str {
        match self {
            Self::StrongMatch => "STRONG MATCH",
            Self::GoodMatch => "GOOD MATCH",
            Self::ModerateMatch => "MODERATE MATCH",
            Self::WeakMatch => "WEAK MATCH",
            Self::PoorMatch => "POOR MATCH",
        }
    }

    /// Fixed advisory phrase attached to the tier.
    pub fn advice(self) -> &'static str {
        match self {
            Self::StrongMatch => "Recommend immediate interview/next round",
            Self::GoodMatch => "Recommend for consideration",
            Self::ModerateMatch => "Consider if other candidates limited",
            Self::WeakMatch => "Not recommended at this time",
            Self::PoorMatch => "Do not recommend",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.label(), self.advice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(Recommendation::from_score(8.0), Recommendation::StrongMatch);
        assert_eq!(Recommendation::from_score(7.999), Recommendation::GoodMatch);
        assert_eq!(Recommendation::from_score(7.0), Recommendation::GoodMatch);
        assert_eq!(Recommendation::from_score(6.0), Recommendation::ModerateMatch);
        assert_eq!(Recommendation::from_score(5.0), Recommendation::WeakMatch);
        assert_eq!(Recommendation::from_score(4.99), Recommendation::PoorMatch);
        assert_eq!(Recommendation::from_score(-1.0), Recommendation::PoorMatch);
    }

    #[test]
    fn display_joins_label_and_advice() {
        assert_eq!(
            Recommendation::StrongMatch.to_string(),
            "STRONG MATCH - Recommend immediate interview/next round"
        );
    }
}
