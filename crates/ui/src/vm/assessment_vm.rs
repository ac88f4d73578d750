use assessment_core::model::{OptionWeight, TrackId};
use services::{AssessmentEngine, AssessmentError, AssessmentOutcome, Stage};

/// Everything the assessment widget can ask the engine to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssessmentIntent {
    SelectTrack(TrackId),
    Start,
    SelectOption { index: usize, weight: OptionWeight },
    Next,
    Previous,
    Restart,
}

/// Forward an intent to the engine.
///
/// # Errors
///
/// Returns the engine's `AssessmentError` when the transition is refused; the
/// engine is left unchanged in that case.
pub fn apply_intent(
    engine: &mut AssessmentEngine,
    intent: AssessmentIntent,
) -> Result<Stage, AssessmentError> {
    match intent {
        AssessmentIntent::SelectTrack(id) => engine.select_track(&id),
        AssessmentIntent::Start => engine.start(),
        AssessmentIntent::SelectOption { index, weight } => engine.select_option(index, weight),
        AssessmentIntent::Next => engine.go_next(),
        AssessmentIntent::Previous => engine.go_previous(),
        AssessmentIntent::Restart => {
            engine.restart();
            Ok(engine.stage())
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackCardVm {
    pub id: TrackId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub features: Vec<String>,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub weight: OptionWeight,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub text: String,
    pub options: Vec<OptionVm>,
    pub position_label: String,
    pub percent_label: String,
    pub percent: u8,
    pub previous_label: &'static str,
    pub next_label: &'static str,
    pub can_go_next: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecommendationVm {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub based_on: String,
    pub score: u8,
    pub tier_label: String,
    pub tier_class: String,
    pub recommendations: Vec<RecommendationVm>,
}

/// Render data for whichever stage the engine is in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssessmentScreenVm {
    Selecting {
        cards: Vec<TrackCardVm>,
        can_start: bool,
    },
    Answering(QuestionVm),
    Results(ResultsVm),
}

#[must_use]
pub fn map_track_cards(engine: &AssessmentEngine) -> Vec<TrackCardVm> {
    let selected = engine.selected_track_id();
    engine
        .catalog()
        .tracks()
        .iter()
        .map(|track| TrackCardVm {
            id: track.id().clone(),
            title: track.title().to_string(),
            subtitle: track.subtitle().to_string(),
            description: track.description().to_string(),
            features: track.features().to_vec(),
            selected: selected == Some(track.id()),
        })
        .collect()
}

#[must_use]
pub fn map_question(engine: &AssessmentEngine) -> Option<QuestionVm> {
    let progress = engine.progress()?;
    let question = engine.current_question()?;
    let index = engine.current_question_index();
    let answers = engine.answers();

    let options = question
        .options()
        .iter()
        .map(|option| OptionVm {
            text: option.text().to_string(),
            weight: option.weight(),
            selected: answers.is_selected(index, option.weight()),
        })
        .collect();

    Some(QuestionVm {
        index,
        text: question.text().to_string(),
        options,
        position_label: format!("Question {} of {}", progress.question_number, progress.total),
        percent_label: format!("{}% Complete", progress.percent_complete),
        percent: progress.percent_complete,
        previous_label: if index == 0 {
            "Back to Selection"
        } else {
            "Previous"
        },
        next_label: if progress.is_last {
            "Get Results"
        } else {
            "Next"
        },
        can_go_next: engine.can_go_next(),
    })
}

#[must_use]
pub fn map_results(outcome: &AssessmentOutcome) -> ResultsVm {
    ResultsVm {
        based_on: format!("Based on your {}", outcome.track_title.to_lowercase()),
        score: outcome.score.value(),
        tier_label: outcome.tier.label().to_string(),
        tier_class: format!("tier--{}", outcome.tier.slug()),
        recommendations: outcome
            .recommendations
            .iter()
            .map(|step| RecommendationVm {
                title: step.title.to_string(),
                body: step.body.to_string(),
            })
            .collect(),
    }
}

#[must_use]
pub fn map_screen(engine: &AssessmentEngine) -> AssessmentScreenVm {
    let answering = match engine.stage() {
        Stage::Answering => map_question(engine).map(AssessmentScreenVm::Answering),
        Stage::Results => engine
            .outcome()
            .map(|outcome| AssessmentScreenVm::Results(map_results(&outcome))),
        Stage::Selecting => None,
    };

    answering.unwrap_or_else(|| AssessmentScreenVm::Selecting {
        cards: map_track_cards(engine),
        can_start: engine.can_start(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessment_core::time::fixed_clock;
    use services::AssessmentService;

    fn engine() -> AssessmentEngine {
        AssessmentService::builtin(fixed_clock()).unwrap().start()
    }

    fn track(raw: &str) -> TrackId {
        TrackId::new(raw).unwrap()
    }

    fn w(value: u8) -> OptionWeight {
        OptionWeight::new(value).unwrap()
    }

    #[test]
    fn selection_marks_chosen_card() {
        let mut engine = engine();
        apply_intent(&mut engine, AssessmentIntent::SelectTrack(track("product"))).unwrap();

        let AssessmentScreenVm::Selecting { cards, can_start } = map_screen(&engine) else {
            panic!("expected selection screen");
        };
        assert!(can_start);
        let selected: Vec<_> = cards.iter().filter(|c| c.selected).map(|c| c.id.as_str()).collect();
        assert_eq!(selected, ["product"]);
        assert_eq!(cards[1].features.len(), 4);
    }

    #[test]
    fn question_screen_labels_follow_position() {
        let mut engine = engine();
        apply_intent(&mut engine, AssessmentIntent::SelectTrack(track("startup"))).unwrap();
        apply_intent(&mut engine, AssessmentIntent::Start).unwrap();

        let question = map_question(&engine).unwrap();
        assert_eq!(question.position_label, "Question 1 of 3");
        assert_eq!(question.percent_label, "33% Complete");
        assert_eq!(question.previous_label, "Back to Selection");
        assert_eq!(question.next_label, "Next");
        assert!(!question.can_go_next);
        assert!(question.options.iter().all(|o| !o.selected));

        apply_intent(
            &mut engine,
            AssessmentIntent::SelectOption { index: 0, weight: w(3) },
        )
        .unwrap();
        let question = map_question(&engine).unwrap();
        assert!(question.can_go_next);
        let selected: Vec<_> = question.options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].weight, w(3));
    }

    #[test]
    fn last_question_offers_results() {
        let mut engine = engine();
        apply_intent(&mut engine, AssessmentIntent::SelectTrack(track("business"))).unwrap();
        apply_intent(&mut engine, AssessmentIntent::Start).unwrap();
        for index in 0..2 {
            apply_intent(&mut engine, AssessmentIntent::SelectOption { index, weight: w(2) }).unwrap();
            apply_intent(&mut engine, AssessmentIntent::Next).unwrap();
        }
        let question = map_question(&engine).unwrap();
        assert_eq!(question.next_label, "Get Results");
        assert_eq!(question.previous_label, "Previous");
        assert_eq!(question.percent, 100);
    }

    #[test]
    fn results_screen_maps_outcome() {
        let mut engine = engine();
        apply_intent(&mut engine, AssessmentIntent::SelectTrack(track("startup"))).unwrap();
        apply_intent(&mut engine, AssessmentIntent::Start).unwrap();
        for (index, weight) in [4, 3, 2].into_iter().enumerate() {
            apply_intent(&mut engine, AssessmentIntent::SelectOption { index, weight: w(weight) }).unwrap();
            apply_intent(&mut engine, AssessmentIntent::Next).unwrap();
        }

        let AssessmentScreenVm::Results(results) = map_screen(&engine) else {
            panic!("expected results screen");
        };
        assert_eq!(results.score, 75);
        assert_eq!(results.tier_label, "Good");
        assert_eq!(results.tier_class, "tier--good");
        assert_eq!(results.based_on, "Based on your startup founder assessment");
        assert_eq!(results.recommendations.len(), 2);
    }

    #[test]
    fn rejected_intent_reports_error() {
        let mut engine = engine();
        let err = apply_intent(&mut engine, AssessmentIntent::Next).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidStage { .. }));
        assert_eq!(apply_intent(&mut engine, AssessmentIntent::Restart), Ok(Stage::Selecting));
    }
}
