use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{ParseTrackIdError, TrackError, WeightError};
use crate::scoring::ScoreError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Track(#[from] TrackError),
    #[error(transparent)]
    TrackId(#[from] ParseTrackIdError),
    #[error(transparent)]
    Weight(#[from] WeightError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}
