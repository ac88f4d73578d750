use chrono::{DateTime, Utc};
use serde::Serialize;

use assessment_core::Score;
use assessment_core::model::{Recommendation, Tier, Track, TrackId};

/// Scored result of a completed assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentOutcome {
    pub track_id: TrackId,
    pub track_title: String,
    pub score: Score,
    pub tier: Tier,
    pub recommendations: [Recommendation; 2],
    pub completed_at: DateTime<Utc>,
}

impl AssessmentOutcome {
    #[must_use]
    pub fn new(track: &Track, score: Score, completed_at: DateTime<Utc>) -> Self {
        let tier = score.tier();
        Self {
            track_id: track.id().clone(),
            track_title: track.title().to_string(),
            score,
            tier,
            recommendations: *tier.recommendations(),
            completed_at,
        }
    }
}
