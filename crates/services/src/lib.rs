#![forbid(unsafe_code)]

pub mod assessment;
pub mod error;

pub use assessment_core::Clock;

pub use error::{AssessmentError, ServiceError};

pub use assessment::{
    Action, AssessmentEngine, AssessmentOutcome, AssessmentProgress, AssessmentService, Stage,
};
