//! Weighted-average scoring.
//!
//! Percentages round half up, computed exactly in integer arithmetic:
//! `round(part / whole * 100) == (200 * part + whole) / (2 * whole)`.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::model::{AnswerSheet, Tier, Track};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    #[error("score must be at most 100, got {0}")]
    OutOfRange(u8),
}

/// Normalised assessment score in `[0, 100]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MAX: Self = Self(100);

    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` above 100.
    pub fn new(value: u8) -> Result<Self, ScoreError> {
        if value > Self::MAX.0 {
            return Err(ScoreError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Scores `total` out of `max`, rounding half up.
    ///
    /// A zero `max` scores 0 and totals above `max` saturate at 100.
    #[must_use]
    pub fn from_totals(total: u32, max: u32) -> Self {
        Self(percent_rounded(total.min(max), max))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn tier(self) -> Tier {
        Tier::from_score(self)
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({})", self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// `round(part / whole * 100)` with ties rounded up; 0 when `whole` is 0.
///
/// `part` is expected to be at most `whole`; larger values clamp to 100.
#[must_use]
pub fn percent_rounded(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = u64::from(part.min(whole));
    let whole = u64::from(whole);
    let pct = (200 * part + whole) / (2 * whole);
    u8::try_from(pct).unwrap_or(100)
}

/// Scores the answers recorded against `track`.
///
/// No track scores 0. Unanswered questions count as weight 0, and entries for
/// indices outside the track are ignored.
#[must_use]
pub fn score_answers(track: Option<&Track>, answers: &AnswerSheet) -> Score {
    let Some(track) = track else {
        return Score::default();
    };
    let total = answers.total_for(track.question_count());
    Score::from_totals(total, track.max_total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, OptionWeight, Question, TrackId};

    fn w(value: u8) -> OptionWeight {
        OptionWeight::new(value).unwrap()
    }

    fn three_question_track() -> Track {
        let questions = (1..=3)
            .map(|n| {
                let options = (1..=4)
                    .rev()
                    .map(|v| AnswerOption::new(format!("answer {v}"), w(v)).unwrap())
                    .collect();
                Question::new(format!("Question {n}"), options).unwrap()
            })
            .collect();
        Track::new(
            TrackId::new("three").unwrap(),
            "Three",
            "",
            "",
            Vec::new(),
            questions,
        )
        .unwrap()
    }

    fn sheet(weights: &[u8]) -> AnswerSheet {
        let mut sheet = AnswerSheet::new();
        for (index, value) in weights.iter().enumerate() {
            sheet.record(index, w(*value));
        }
        sheet
    }

    #[test]
    fn mixed_answers_score_75_good() {
        let track = three_question_track();
        let score = score_answers(Some(&track), &sheet(&[4, 3, 2]));
        assert_eq!(score.value(), 75);
        assert_eq!(score.tier(), Tier::Good);
    }

    #[test]
    fn minimum_answers_score_25() {
        let track = three_question_track();
        let score = score_answers(Some(&track), &sheet(&[1, 1, 1]));
        assert_eq!(score.value(), 25);
        assert_eq!(score.tier(), Tier::NeedsImprovement);
    }

    #[test]
    fn maximum_answers_score_100() {
        let track = three_question_track();
        let score = score_answers(Some(&track), &sheet(&[4, 4, 4]));
        assert_eq!(score, Score::MAX);
        assert_eq!(score.tier(), Tier::Excellent);
    }

    #[test]
    fn missing_track_scores_zero() {
        assert_eq!(score_answers(None, &sheet(&[4, 4, 4])).value(), 0);
    }

    #[test]
    fn missing_answers_count_as_zero() {
        let track = three_question_track();
        // 4 / 12 = 33.3
        assert_eq!(score_answers(Some(&track), &sheet(&[4])).value(), 33);
        assert_eq!(score_answers(Some(&track), &AnswerSheet::new()).value(), 0);
    }

    #[test]
    fn every_combination_stays_in_range() {
        let track = three_question_track();
        for a in 1..=4 {
            for b in 1..=4 {
                for c in 1..=4 {
                    let score = score_answers(Some(&track), &sheet(&[a, b, c]));
                    assert!((25..=100).contains(&score.value()));
                }
            }
        }
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(percent_rounded(1, 8), 13); // 12.5
        assert_eq!(percent_rounded(3, 8), 38); // 37.5
        assert_eq!(percent_rounded(1, 3), 33);
        assert_eq!(percent_rounded(2, 3), 67);
    }

    #[test]
    fn percent_handles_degenerate_inputs() {
        assert_eq!(percent_rounded(0, 0), 0);
        assert_eq!(percent_rounded(7, 5), 100);
        assert_eq!(Score::from_totals(20, 12), Score::MAX);
    }

    #[test]
    fn score_new_rejects_above_100() {
        assert_eq!(Score::new(101), Err(ScoreError::OutOfRange(101)));
    }
}
