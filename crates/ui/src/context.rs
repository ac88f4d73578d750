use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use assessment_core::model::TrackId;
use services::{AssessmentEngine, AssessmentService};
use tracing::warn;

pub trait UiApp: Send + Sync {
    fn assessments(&self) -> Arc<AssessmentService>;
    fn preselected_track(&self) -> Option<TrackId>;
    fn open_assessment_on_launch(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    assessments: Arc<AssessmentService>,
    preselected_track: Option<TrackId>,
    open_assessment_on_launch_configured: bool,
    open_assessment_on_launch_once: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let open_assessment_on_launch_configured = app.open_assessment_on_launch();

        Self {
            assessments: app.assessments(),
            preselected_track: app.preselected_track(),
            open_assessment_on_launch_configured,
            open_assessment_on_launch_once: Arc::new(AtomicBool::new(
                open_assessment_on_launch_configured,
            )),
        }
    }

    #[must_use]
    pub fn assessments(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessments)
    }

    #[must_use]
    pub fn preselected_track(&self) -> Option<&TrackId> {
        self.preselected_track.as_ref()
    }

    /// A fresh assessment session, with the configured track chosen if any.
    #[must_use]
    pub fn new_assessment(&self) -> AssessmentEngine {
        let Some(track) = self.preselected_track.as_ref() else {
            return self.assessments.start();
        };
        match self.assessments.start_with_track(track) {
            Ok(engine) => engine,
            Err(err) => {
                warn!(%track, error = %err, "ignoring preselected track");
                self.assessments.start()
            }
        }
    }

    #[must_use]
    pub fn take_open_assessment_on_launch(&self) -> bool {
        self.open_assessment_on_launch_once
            .swap(false, Ordering::AcqRel)
    }

    /// The configured value (not the one-shot value).
    #[must_use]
    pub fn open_assessment_on_launch_configured(&self) -> bool {
        self.open_assessment_on_launch_configured
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
