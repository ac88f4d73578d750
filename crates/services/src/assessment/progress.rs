use assessment_core::percent_rounded;

/// Aggregated view of question progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessmentProgress {
    /// 1-based position of the current question.
    pub question_number: usize,
    pub total: usize,
    pub answered: usize,
    pub percent_complete: u8,
    pub current_answered: bool,
    pub is_last: bool,
}

impl AssessmentProgress {
    #[must_use]
    pub fn new(index: usize, total: usize, answered: usize, current_answered: bool) -> Self {
        let question_number = index + 1;
        let percent_complete = percent_rounded(
            u32::try_from(question_number).unwrap_or(u32::MAX),
            u32::try_from(total).unwrap_or(u32::MAX),
        );
        Self {
            question_number,
            total,
            answered,
            percent_complete,
            current_answered,
            is_last: question_number >= total,
        }
    }
}
