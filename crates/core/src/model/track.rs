use serde::Serialize;
use thiserror::Error;

use crate::model::ids::TrackId;
use crate::model::weight::OptionWeight;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrackError {
    #[error("track title cannot be empty")]
    EmptyTitle,

    #[error("track must have at least one question")]
    NoQuestions,

    #[error("question text cannot be empty")]
    EmptyQuestionText,

    #[error("question {index} has no options")]
    NoOptions { index: usize },

    #[error("option text cannot be empty")]
    EmptyOptionText,

    #[error("question {index} has two options with weight {weight}")]
    DuplicateWeight { index: usize, weight: OptionWeight },
}

//
// ─── OPTION ────────────────────────────────────────────────────────────────────
//

/// One selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    text: String,
    weight: OptionWeight,
}

impl AnswerOption {
    /// # Errors
    ///
    /// Returns `TrackError::EmptyOptionText` if the text is blank.
    pub fn new(text: impl Into<String>, weight: OptionWeight) -> Result<Self, TrackError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(TrackError::EmptyOptionText);
        }
        Ok(Self { text, weight })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn weight(&self) -> OptionWeight {
        self.weight
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A prompt with its options in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    options: Vec<AnswerOption>,
}

impl Question {
    /// # Errors
    ///
    /// Returns `TrackError::EmptyQuestionText` for a blank prompt.
    /// Option-level checks happen in [`Track::new`], which knows the question index.
    pub fn new(text: impl Into<String>, options: Vec<AnswerOption>) -> Result<Self, TrackError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(TrackError::EmptyQuestionText);
        }
        Ok(Self { text, options })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Looks up the option carrying `weight`, if any.
    #[must_use]
    pub fn option_with_weight(&self, weight: OptionWeight) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.weight == weight)
    }
}

//
// ─── TRACK ─────────────────────────────────────────────────────────────────────
//

/// A selectable assessment variant with its own question set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    id: TrackId,
    title: String,
    subtitle: String,
    description: String,
    features: Vec<String>,
    questions: Vec<Question>,
}

impl Track {
    /// Creates a validated track.
    ///
    /// # Errors
    ///
    /// Returns `TrackError` if the title is blank, there are no questions,
    /// a question has no options, or two options of one question share a weight.
    pub fn new(
        id: TrackId,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        description: impl Into<String>,
        features: Vec<String>,
        questions: Vec<Question>,
    ) -> Result<Self, TrackError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TrackError::EmptyTitle);
        }
        if questions.is_empty() {
            return Err(TrackError::NoQuestions);
        }
        for (index, question) in questions.iter().enumerate() {
            if question.options.is_empty() {
                return Err(TrackError::NoOptions { index });
            }
            for (pos, option) in question.options.iter().enumerate() {
                if question.options[..pos]
                    .iter()
                    .any(|earlier| earlier.weight == option.weight)
                {
                    return Err(TrackError::DuplicateWeight {
                        index,
                        weight: option.weight,
                    });
                }
            }
        }

        Ok(Self {
            id,
            title,
            subtitle: subtitle.into(),
            description: description.into(),
            features,
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> &TrackId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Highest total a fully answered track can reach.
    #[must_use]
    pub fn max_total(&self) -> u32 {
        let count = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        count.saturating_mul(u32::from(OptionWeight::MAX.value()))
    }
}
