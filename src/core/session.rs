// File: src/core/session.rs
use crate::core::types::{AnalyzedWord, UserJudgment};

/// The words of the current analysis and a review cursor into them.
#[derive(Debug, Clone, Default)]
pub struct ReviewSession {
    words: Vec<AnalyzedWord>,
    index: usize,
}

impl ReviewSession {
    pub fn new(words: Vec<AnalyzedWord>) -> Self {
        Self { words, index: 0 }
    }

    /// Swaps in a new analysis and rewinds the cursor.
    pub fn replace(&mut self, words: Vec<AnalyzedWord>) {
        self.words = words;
        self.index = 0;
    }

    pub fn words(&self) -> &[AnalyzedWord] {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut [AnalyzedWord] {
        &mut self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&AnalyzedWord> {
        self.words.get(self.index)
    }

    /// Moves the cursor by `step`, clamped to the first and last word.
    pub fn advance(&mut self, step: isize) -> Option<&AnalyzedWord> {
        let last = self.words.len().saturating_sub(1);
        self.index = self.index.saturating_add_signed(step).min(last);
        self.current()
    }

    /// Records `correction` on every word sharing the current word's text.
    /// Returns the corrected word text, or `None` when the session is empty.
    pub fn correct_current(&mut self, correction: &UserJudgment) -> Option<String> {
        let text = self.current()?.word.clone();
        for word in self.words.iter_mut().filter(|w| w.word == text) {
            word.user = Some(correction.clone());
        }
        Some(text)
    }
}
