use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use assessment_core::model::{AnswerSheet, OptionWeight, Question, Tier, Track, TrackId};
use assessment_core::{Catalog, Clock, Score, score_answers};

use super::outcome::AssessmentOutcome;
use super::progress::AssessmentProgress;
use crate::error::AssessmentError;

//
// ─── STAGE ─────────────────────────────────────────────────────────────────────
//

/// Coarse phase of an assessment session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Selecting,
    Answering,
    Results,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Selecting => "selecting",
            Stage::Answering => "answering",
            Stage::Results => "results",
        })
    }
}

/// Visitor action, used to report rejected transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectTrack,
    Start,
    SelectOption,
    Next,
    Previous,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::SelectTrack => "select track",
            Action::Start => "start",
            Action::SelectOption => "select option",
            Action::Next => "next",
            Action::Previous => "previous",
        })
    }
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Single-visitor assessment session: track selection, questions, results.
///
/// Every transition either applies fully and returns the resulting stage, or
/// returns an `AssessmentError` and leaves the session untouched.
#[derive(Clone, PartialEq)]
pub struct AssessmentEngine {
    catalog: Arc<Catalog>,
    clock: Clock,
    stage: Stage,
    selected: Option<TrackId>,
    current: usize,
    answers: AnswerSheet,
    completed_at: Option<DateTime<Utc>>,
}

impl AssessmentEngine {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, clock: Clock) -> Self {
        Self {
            catalog,
            clock,
            stage: Stage::Selecting,
            selected: None,
            current: 0,
            answers: AnswerSheet::new(),
            completed_at: None,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn selected_track(&self) -> Option<&Track> {
        self.selected.as_ref().and_then(|id| self.catalog.get(id))
    }

    #[must_use]
    pub fn selected_track_id(&self) -> Option<&TrackId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.selected_track()
            .and_then(|track| track.question(self.current))
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// True once a track is chosen and the session is still selecting.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.stage == Stage::Selecting && self.selected.is_some()
    }

    /// True while answering and the current question has an answer.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.stage == Stage::Answering && self.answers.is_answered(self.current)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.selected_track()
            .is_some_and(|track| self.current + 1 >= track.question_count())
    }

    /// Question position for the progress bar; only while answering.
    #[must_use]
    pub fn progress(&self) -> Option<AssessmentProgress> {
        if self.stage != Stage::Answering {
            return None;
        }
        let track = self.selected_track()?;
        let total = track.question_count();
        let answered = self.answers.iter().filter(|(index, _)| *index < total).count();
        Some(AssessmentProgress::new(
            self.current,
            total,
            answered,
            self.answers.is_answered(self.current),
        ))
    }

    /// Score of the recorded answers. 0 when no track is selected.
    #[must_use]
    pub fn score(&self) -> Score {
        score_answers(self.selected_track(), &self.answers)
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.score().tier()
    }

    /// The scored result; only available in the results stage.
    #[must_use]
    pub fn outcome(&self) -> Option<AssessmentOutcome> {
        if self.stage != Stage::Results {
            return None;
        }
        let track = self.selected_track()?;
        let completed_at = self.completed_at?;
        Some(AssessmentOutcome::new(track, self.score(), completed_at))
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Choose a track while selecting.
    ///
    /// Switching to a different track drops answers recorded for the previous one.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::InvalidStage` outside the selecting stage and
    /// `AssessmentError::UnknownTrack` for ids missing from the catalog.
    pub fn select_track(&mut self, id: &TrackId) -> Result<Stage, AssessmentError> {
        self.require_stage(Stage::Selecting, Action::SelectTrack)?;
        if self.catalog.get(id).is_none() {
            return self.reject(AssessmentError::UnknownTrack(id.clone()));
        }

        if self.selected.as_ref() != Some(id) {
            if !self.answers.is_empty() {
                debug!(track = %id, dropped = self.answers.len(), "track changed; clearing answers");
            }
            self.answers.clear();
            self.selected = Some(id.clone());
        }
        debug!(track = %id, "track selected");
        Ok(self.stage)
    }

    /// Begin answering the selected track from its first question.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::NoTrackSelected` when no track is chosen.
    pub fn start(&mut self) -> Result<Stage, AssessmentError> {
        self.require_stage(Stage::Selecting, Action::Start)?;
        let Some(track) = self.selected_track() else {
            return self.reject(AssessmentError::NoTrackSelected);
        };
        debug!(track = %track.id(), questions = track.question_count(), "assessment started");

        self.stage = Stage::Answering;
        self.current = 0;
        Ok(self.stage)
    }

    /// Record `weight` as the answer to question `index`, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::QuestionOutOfRange` for indices outside the
    /// track and `AssessmentError::UnknownOption` when no option carries `weight`.
    pub fn select_option(
        &mut self,
        index: usize,
        weight: OptionWeight,
    ) -> Result<Stage, AssessmentError> {
        self.require_stage(Stage::Answering, Action::SelectOption)?;
        let Some(track) = self.selected_track() else {
            return self.reject(AssessmentError::NoTrackSelected);
        };
        let count = track.question_count();
        let Some(question) = track.question(index) else {
            return self.reject(AssessmentError::QuestionOutOfRange { index, count });
        };
        if question.option_with_weight(weight).is_none() {
            return self.reject(AssessmentError::UnknownOption { index, weight });
        }

        let previous = self.answers.record(index, weight);
        debug!(index, %weight, ?previous, "answer recorded");
        Ok(self.stage)
    }

    /// Advance to the next question, or to results from the last one.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::Unanswered` while the current question has no answer.
    pub fn go_next(&mut self) -> Result<Stage, AssessmentError> {
        self.require_stage(Stage::Answering, Action::Next)?;
        if !self.answers.is_answered(self.current) {
            return self.reject(AssessmentError::Unanswered {
                index: self.current,
            });
        }

        if self.is_last_question() {
            self.stage = Stage::Results;
            self.completed_at = Some(self.clock.now());
            if let Some(track) = self.selected_track() {
                let score = self.score();
                info!(track = %track.id(), %score, tier = %score.tier(), "assessment completed");
            }
        } else {
            self.current += 1;
            debug!(index = self.current, "next question");
        }
        Ok(self.stage)
    }

    /// Step back one question; from the first question, return to selection.
    ///
    /// Answers and the chosen track are kept.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::InvalidStage` outside the answering stage.
    pub fn go_previous(&mut self) -> Result<Stage, AssessmentError> {
        self.require_stage(Stage::Answering, Action::Previous)?;
        if self.current == 0 {
            self.stage = Stage::Selecting;
            debug!("back to track selection");
        } else {
            self.current -= 1;
            debug!(index = self.current, "previous question");
        }
        Ok(self.stage)
    }

    /// Reset to an empty selecting session. Always succeeds.
    pub fn restart(&mut self) {
        debug!(from = %self.stage, "assessment restarted");
        self.stage = Stage::Selecting;
        self.selected = None;
        self.current = 0;
        self.answers.clear();
        self.completed_at = None;
    }

    fn require_stage(&self, expected: Stage, action: Action) -> Result<(), AssessmentError> {
        if self.stage == expected {
            return Ok(());
        }
        self.reject(AssessmentError::InvalidStage {
            action,
            stage: self.stage,
        })
    }

    fn reject<T>(&self, err: AssessmentError) -> Result<T, AssessmentError> {
        debug!(stage = %self.stage, error = %err, "transition rejected");
        Err(err)
    }
}

impl fmt::Debug for AssessmentEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentEngine")
            .field("stage", &self.stage)
            .field("selected", &self.selected)
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
