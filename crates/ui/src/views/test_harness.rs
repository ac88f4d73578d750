use std::sync::Arc;

use assessment_core::model::TrackId;
use assessment_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AssessmentEngine, AssessmentService};

use crate::context::{UiApp, build_app_context};
use crate::views::{AssessmentFlow, AssessmentView, HomeView};

struct TestApp {
    assessments: Arc<AssessmentService>,
    preselected_track: Option<TrackId>,
}

impl UiApp for TestApp {
    fn assessments(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessments)
    }

    fn preselected_track(&self) -> Option<TrackId> {
        self.preselected_track.clone()
    }

    fn open_assessment_on_launch(&self) -> bool {
        false
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Home,
    Assessment,
    /// The widget seeded with an engine driven ahead of time.
    Flow(AssessmentEngine),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Assessment => rsx! { AssessmentView {} },
        ViewKind::Flow(initial) => rsx! { AssessmentFlow { initial } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_service() -> Arc<AssessmentService> {
    Arc::new(AssessmentService::builtin(fixed_clock()).expect("builtin catalog"))
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_track(view, None)
}

pub fn setup_view_harness_with_track(view: ViewKind, track: Option<&str>) -> ViewHarness {
    let app = Arc::new(TestApp {
        assessments: test_service(),
        preselected_track: track.map(|raw| TrackId::new(raw).expect("track id")),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom }
}
