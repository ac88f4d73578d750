mod engine;
mod outcome;
mod progress;
mod service;

// Public API of the assessment subsystem.
pub use crate::error::AssessmentError;
pub use engine::{Action, AssessmentEngine, Stage};
pub use outcome::AssessmentOutcome;
pub use progress::AssessmentProgress;
pub use service::AssessmentService;
