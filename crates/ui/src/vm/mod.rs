mod assessment_vm;

pub use assessment_vm::{
    AssessmentIntent, AssessmentScreenVm, OptionVm, QuestionVm, RecommendationVm, ResultsVm,
    TrackCardVm, apply_intent, map_question, map_results, map_screen, map_track_cards,
};
