use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::weight::OptionWeight;

/// Chosen option weight per question index.
///
/// One entry per index; recording again for the same index replaces the
/// previous choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnswerSheet {
    entries: BTreeMap<usize, OptionWeight>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `weight` for `index`, returning the value it replaced.
    pub fn record(&mut self, index: usize, weight: OptionWeight) -> Option<OptionWeight> {
        self.entries.insert(index, weight)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<OptionWeight> {
        self.entries.get(&index).copied()
    }

    #[must_use]
    pub fn is_answered(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// True when the stored answer for `index` is exactly `weight`.
    #[must_use]
    pub fn is_selected(&self, index: usize, weight: OptionWeight) -> bool {
        self.get(index) == Some(weight)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every recorded weight.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries
            .values()
            .map(|weight| u32::from(weight.value()))
            .sum()
    }

    /// Sum of recorded weights for indices below `question_count`.
    ///
    /// Unanswered questions contribute nothing.
    #[must_use]
    pub fn total_for(&self, question_count: usize) -> u32 {
        self.entries
            .range(..question_count)
            .map(|(_, weight)| u32::from(weight.value()))
            .sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, OptionWeight)> + '_ {
        self.entries.iter().map(|(index, weight)| (*index, *weight))
    }
}
