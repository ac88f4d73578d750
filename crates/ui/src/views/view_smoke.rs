use assessment_core::model::{OptionWeight, TrackId};
use services::AssessmentEngine;

use super::test_harness::{
    ViewKind, setup_view_harness, setup_view_harness_with_track, test_service,
};

fn w(value: u8) -> OptionWeight {
    OptionWeight::new(value).unwrap()
}

fn started(track: &str) -> AssessmentEngine {
    let mut engine = test_service().start();
    engine.select_track(&TrackId::new(track).unwrap()).unwrap();
    engine.start().unwrap();
    engine
}

fn render(view: ViewKind) -> String {
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.render()
}

#[test]
fn home_view_smoke_renders_marketing_sections() {
    let html = render(ViewKind::Home);
    for expected in [
        "Your Human-Centered Design Partners",
        "Discover Your UX Growth Opportunities",
        "Start Free Assessment",
        "Check your UX",
        "id=\"services\"",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[test]
fn assessment_view_smoke_renders_selection() {
    let html = render(ViewKind::Assessment);
    assert!(html.contains("Choose Your UX Assessment Path"), "missing title in {html}");
    assert!(html.contains("Startup Founder Assessment"), "missing startup card in {html}");
    assert!(html.contains("Product Team Assessment"), "missing product card in {html}");
    assert!(html.contains("Local Business Assessment"), "missing business card in {html}");
    assert!(html.contains("What We Analyze:"), "missing feature heading in {html}");
    assert!(html.contains("Start Assessment"), "missing start button in {html}");
    assert!(!html.contains("Selected - Continue to questions"), "nothing chosen yet: {html}");
}

#[test]
fn assessment_view_smoke_honours_preselected_track() {
    let mut harness = setup_view_harness_with_track(ViewKind::Assessment, Some("product"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("track-card--product track-card--selected"), "missing selection in {html}");
    assert!(html.contains("Selected - Continue to questions"), "missing marker in {html}");
}

#[test]
fn assessment_view_smoke_ignores_unknown_preselected_track() {
    let mut harness = setup_view_harness_with_track(ViewKind::Assessment, Some("enterprise"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Choose Your UX Assessment Path"), "missing title in {html}");
    assert!(!html.contains("track-card--selected"), "unexpected selection in {html}");
}

#[test]
fn question_stage_smoke_renders_progress() {
    let html = render(ViewKind::Flow(started("startup")));
    assert!(html.contains("Question 1 of 3"), "missing position in {html}");
    assert!(html.contains("33% Complete"), "missing percent in {html}");
    assert!(html.contains("width: 33%"), "missing progress width in {html}");
    assert!(html.contains("Back to Selection"), "missing back label in {html}");
    assert!(!html.contains("option--selected"), "no option chosen yet: {html}");
}

#[test]
fn question_stage_smoke_marks_chosen_option_on_last_question() {
    let mut engine = started("business");
    for _ in 0..2 {
        let index = engine.current_question_index();
        engine.select_option(index, w(3)).unwrap();
        engine.go_next().unwrap();
    }
    engine.select_option(2, w(1)).unwrap();

    let html = render(ViewKind::Flow(engine));
    assert!(html.contains("Question 3 of 3"), "missing position in {html}");
    assert!(html.contains("Get Results"), "missing results label in {html}");
    assert!(html.contains("Previous"), "missing previous label in {html}");
    assert_eq!(html.matches("option--selected").count(), 1, "one option chosen: {html}");
}

#[test]
fn results_stage_smoke_renders_score_and_steps() {
    let mut engine = started("startup");
    for weight in [4, 3, 2] {
        let index = engine.current_question_index();
        engine.select_option(index, w(weight)).unwrap();
        engine.go_next().unwrap();
    }

    let html = render(ViewKind::Flow(engine));
    for expected in [
        "Your UX Assessment Results",
        "Based on your startup founder assessment",
        ">75<",
        "tier--good",
        "Good",
        "Recommended Next Steps",
        "Systematic Improvements",
        "Strengthen Core Areas",
        "Take Another Assessment",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}
