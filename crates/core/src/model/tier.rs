use serde::Serialize;
use std::fmt;

use crate::scoring::Score;

//
// ─── TIER ──────────────────────────────────────────────────────────────────────
//

/// Qualitative bucket a score falls into.
///
/// - `Excellent`: 85 and above
/// - `Good`: 70 to 84
/// - `Fair`: 50 to 69
/// - `NeedsImprovement`: below 50
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    NeedsImprovement,
    Fair,
    Good,
    Excellent,
}

impl Tier {
    pub const EXCELLENT_FROM: u8 = 85;
    pub const GOOD_FROM: u8 = 70;
    pub const FAIR_FROM: u8 = 50;

    #[must_use]
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            s if s >= Self::EXCELLENT_FROM => Self::Excellent,
            s if s >= Self::GOOD_FROM => Self::Good,
            s if s >= Self::FAIR_FROM => Self::Fair,
            _ => Self::NeedsImprovement,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Fair => "Fair",
            Tier::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Kebab-case key, handy for CSS modifiers.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Fair => "fair",
            Tier::NeedsImprovement => "needs-improvement",
        }
    }

    /// The fixed pair of next steps shown for this tier.
    #[must_use]
    pub fn recommendations(self) -> &'static [Recommendation; 2] {
        match self {
            Tier::Excellent => &EXCELLENT_STEPS,
            Tier::Good => &GOOD_STEPS,
            Tier::Fair | Tier::NeedsImprovement => &FOUNDATION_STEPS,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── RECOMMENDATIONS ───────────────────────────────────────────────────────────
//

/// Canned next-step blurb shown on the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub body: &'static str,
}

const EXCELLENT_STEPS: [Recommendation; 2] = [
    Recommendation {
        title: "Optimization & Innovation",
        body: "Focus on advanced conversion optimization and competitive differentiation strategies.",
    },
    Recommendation {
        title: "Scale Your Success",
        body: "Your UX foundation is strong. Consider mentoring other teams or expanding to new markets.",
    },
];

const GOOD_STEPS: [Recommendation; 2] = [
    Recommendation {
        title: "Systematic Improvements",
        body: "Good foundation with clear optimization opportunities. Focus on user research and conversion testing.",
    },
    Recommendation {
        title: "Strengthen Core Areas",
        body: "Build on your strengths while addressing specific gaps identified in the assessment.",
    },
];

const FOUNDATION_STEPS: [Recommendation; 2] = [
    Recommendation {
        title: "Foundation Building",
        body: "Significant opportunities for improvement. Start with user research and basic UX principles.",
    },
    Recommendation {
        title: "Quick Wins Available",
        body: "Focus on high-impact, low-effort improvements first to build momentum.",
    },
];
