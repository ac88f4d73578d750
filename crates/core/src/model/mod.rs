mod answers;
mod ids;
mod tier;
mod track;
mod weight;

pub use answers::AnswerSheet;
pub use ids::{ParseTrackIdError, TrackId};
pub use tier::{Recommendation, Tier};
pub use track::{AnswerOption, Question, Track, TrackError};
pub use weight::{OptionWeight, WeightError};
