use dioxus::prelude::*;
use services::AssessmentEngine;
use tracing::debug;

use crate::context::AppContext;
use crate::vm::{
    AssessmentIntent, AssessmentScreenVm, QuestionVm, ResultsVm, TrackCardVm, apply_intent,
    map_screen,
};

#[component]
pub fn AssessmentView() -> Element {
    let ctx = use_context::<AppContext>();
    let initial = use_hook(|| ctx.new_assessment());

    rsx! {
        AssessmentFlow { initial }
    }
}

/// The three-stage widget, seeded with an engine.
///
/// Controls that would trigger a refused transition are disabled, so
/// rejections from the engine are only logged.
#[component]
pub fn AssessmentFlow(initial: AssessmentEngine) -> Element {
    let mut engine = use_signal(move || initial);
    let dispatch = use_callback(move |intent: AssessmentIntent| {
        if let Err(err) = apply_intent(&mut engine.write(), intent) {
            debug!(error = %err, "assessment intent ignored");
        }
    });

    let screen = map_screen(&engine.read());

    rsx! {
        div { class: "page assessment-page",
            header { class: "assessment-header",
                span { class: "assessment-badge", "UX Assessment" }
            }
            match screen {
                AssessmentScreenVm::Selecting { cards, can_start } => rsx! {
                    SelectionStage { cards, can_start, on_intent: dispatch }
                },
                AssessmentScreenVm::Answering(question) => rsx! {
                    QuestionStage { question, on_intent: dispatch }
                },
                AssessmentScreenVm::Results(results) => rsx! {
                    ResultsStage { results, on_intent: dispatch }
                },
            }
        }
    }
}

#[component]
fn SelectionStage(
    cards: Vec<TrackCardVm>,
    can_start: bool,
    on_intent: EventHandler<AssessmentIntent>,
) -> Element {
    rsx! {
        section { class: "assessment-selection",
            h1 { class: "view-title", "Choose Your UX Assessment Path" }
            p { class: "view-subtitle",
                "Select the assessment that best matches your role and challenges to get personalized insights."
            }
            div { class: "track-grid",
                for card in cards {
                    TrackCard { key: "{card.id}", card: card.clone(), on_intent }
                }
            }
            button {
                class: "btn btn-primary assessment-start",
                r#type: "button",
                disabled: !can_start,
                onclick: move |_| on_intent.call(AssessmentIntent::Start),
                "Start Assessment"
            }
        }
    }
}

#[component]
fn TrackCard(card: TrackCardVm, on_intent: EventHandler<AssessmentIntent>) -> Element {
    let id = card.id.clone();
    let modifier = if card.selected { " track-card--selected" } else { "" };

    rsx! {
        div {
            class: "track-card track-card--{card.id}{modifier}",
            onclick: move |_| on_intent.call(AssessmentIntent::SelectTrack(id.clone())),
            h3 { class: "track-card-title", "{card.title}" }
            p { class: "track-card-subtitle", "{card.subtitle}" }
            p { class: "track-card-description", "{card.description}" }
            h4 { "What We Analyze:" }
            ul { class: "track-card-features",
                for feature in card.features.iter() {
                    li { "{feature}" }
                }
            }
            if card.selected {
                div { class: "track-card-selected", "Selected - Continue to questions" }
            }
        }
    }
}

#[component]
fn QuestionStage(question: QuestionVm, on_intent: EventHandler<AssessmentIntent>) -> Element {
    let index = question.index;

    rsx! {
        section { class: "assessment-question",
            div { class: "progress",
                div { class: "progress-labels",
                    span { "{question.position_label}" }
                    span { "{question.percent_label}" }
                }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {question.percent}%" }
                }
            }
            h2 { class: "question-text", "{question.text}" }
            div { class: "question-options",
                for option in question.options.iter().cloned() {
                    button {
                        key: "{option.weight}",
                        class: if option.selected { "option option--selected" } else { "option" },
                        r#type: "button",
                        onclick: move |_| on_intent.call(AssessmentIntent::SelectOption {
                            index,
                            weight: option.weight,
                        }),
                        span { class: "option-marker" }
                        span { class: "option-text", "{option.text}" }
                    }
                }
            }
            div { class: "question-nav",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(AssessmentIntent::Previous),
                    "{question.previous_label}"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !question.can_go_next,
                    onclick: move |_| on_intent.call(AssessmentIntent::Next),
                    "{question.next_label}"
                }
            }
        }
    }
}

#[component]
fn ResultsStage(results: ResultsVm, on_intent: EventHandler<AssessmentIntent>) -> Element {
    rsx! {
        section { class: "assessment-results",
            h1 { class: "view-title", "Your UX Assessment Results" }
            p { class: "view-subtitle", "{results.based_on}" }
            div { class: "score-card {results.tier_class}",
                div { class: "score-dial",
                    span { class: "score-value", "{results.score}" }
                }
                h2 { class: "score-tier", "{results.tier_label}" }
                div { class: "score-bar",
                    div { class: "score-bar-fill", style: "width: {results.score}%" }
                }
            }
            div { class: "recommendations",
                h3 { "Recommended Next Steps" }
                for step in results.recommendations.iter() {
                    div { class: "recommendation",
                        h4 { "{step.title}" }
                        p { "{step.body}" }
                    }
                }
            }
            div { class: "results-cta",
                h3 { "Ready to Implement These Insights?" }
                p {
                    "Get personalized guidance from our UX experts to turn these recommendations into real results."
                }
                a { class: "btn btn-light", href: "#collab", "Schedule Strategy Call" }
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| on_intent.call(AssessmentIntent::Restart),
                    "Take Another Assessment"
                }
            }
        }
    }
}
