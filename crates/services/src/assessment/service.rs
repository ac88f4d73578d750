use std::sync::Arc;

use tracing::debug;

use assessment_core::model::TrackId;
use assessment_core::{Catalog, Clock};

use super::engine::AssessmentEngine;
use crate::error::{AssessmentError, ServiceError};

/// Hands out assessment sessions over a shared catalog.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    clock: Clock,
    catalog: Arc<Catalog>,
}

impl AssessmentService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<Catalog>) -> Self {
        Self { clock, catalog }
    }

    /// Service over the built-in tracks.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Catalog` if the built-in table fails validation.
    pub fn builtin(clock: Clock) -> Result<Self, ServiceError> {
        let catalog = Catalog::builtin()?;
        debug!(tracks = catalog.len(), "catalog loaded");
        Ok(Self::new(clock, Arc::new(catalog)))
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// A fresh session in the selecting stage.
    #[must_use]
    pub fn start(&self) -> AssessmentEngine {
        AssessmentEngine::new(Arc::clone(&self.catalog), self.clock)
    }

    /// A fresh session with `track` already chosen.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::UnknownTrack` if the catalog has no such track.
    pub fn start_with_track(&self, track: &TrackId) -> Result<AssessmentEngine, AssessmentError> {
        let mut engine = self.start();
        engine.select_track(track)?;
        Ok(engine)
    }

    /// Checks that `track` names a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::UnknownTrack` otherwise.
    pub fn ensure_track(&self, track: &TrackId) -> Result<(), AssessmentError> {
        if self.catalog.get(track).is_some() {
            Ok(())
        } else {
            Err(AssessmentError::UnknownTrack(track.clone()))
        }
    }

    /// Pretty-printed JSON of every track, question and option.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Export` if serialization fails.
    pub fn export_catalog_json(&self) -> Result<String, ServiceError> {
        Ok(serde_json::to_string_pretty(self.catalog.as_ref())?)
    }
}
