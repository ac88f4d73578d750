//! Shared error types for the services crate.

use thiserror::Error;

use assessment_core::CatalogError;
use assessment_core::model::{OptionWeight, TrackId};

use crate::assessment::{Action, Stage};

/// A transition the assessment engine refused.
///
/// The engine state is unchanged whenever one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("unknown track {0}")]
    UnknownTrack(TrackId),
    #[error("{action} is not allowed while {stage}")]
    InvalidStage { action: Action, stage: Stage },
    #[error("no track selected")]
    NoTrackSelected,
    #[error("question {index} is out of range ({count} questions)")]
    QuestionOutOfRange { index: usize, count: usize },
    #[error("question {index} has no option with weight {weight}")]
    UnknownOption { index: usize, weight: OptionWeight },
    #[error("question {index} has not been answered")]
    Unanswered { index: usize },
}

/// Errors emitted while assembling services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error("failed to export catalog: {0}")]
    Export(#[from] serde_json::Error),
}
