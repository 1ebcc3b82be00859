use crate::core::analysis::analyze_sentence;
use crate::core::session::ReviewSession;
use crate::core::types::{AnalyzedWord, UserJudgment};
use crate::error::{AnalyzeError, SaveError};
use crate::overlay::apply_corrections;
use crate::persistence::CorrectionStore;
use crate::tagger::Tagger;

// The review engine is composed of the tagger, the correction store and the
// session being reviewed.
pub struct ReviewEngine<T, S> {
    tagger: T,
    store: S,
    session: ReviewSession,
}

impl<T: Tagger, S: CorrectionStore> ReviewEngine<T, S> {
    pub fn new(tagger: T, store: S) -> Self {
        Self {
            tagger,
            store,
            session: ReviewSession::default(),
        }
    }

    /// Tags `sentence`, overlays stored corrections and makes the result the
    /// current session with the cursor on the first word.
    pub fn analyze(&mut self, sentence: &str) -> Result<&[AnalyzedWord], AnalyzeError> {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            return Err(AnalyzeError::EmptySentence);
        }

        // 1. One tagger call for the whole sentence, classified per token
        let mut words = analyze_sentence(&self.tagger, sentence)?;

        // 2. Stored corrections take over where they exist
        let corrected = apply_corrections(&mut words, &self.store);
        log::debug!(
            "Analyzed {} words ({} corrected) from {:?}",
            words.len(),
            corrected,
            sentence
        );

        self.session.replace(words);
        Ok(self.session.words())
    }

    /// Re-applies stored corrections to the current session without tagging again.
    pub fn refresh(&mut self) -> &[AnalyzedWord] {
        apply_corrections(self.session.words_mut(), &self.store);
        self.session.words()
    }

    /// Saves a correction for the word under the cursor.
    ///
    /// Fields are trimmed first; a correction with every field blank is rejected
    /// without touching the store. On success every occurrence of the word in
    /// the session shows the correction immediately.
    pub fn save_correction(&mut self, correction: &UserJudgment) -> Result<(), SaveError> {
        let correction = correction.trimmed();
        if correction.is_blank() {
            return Err(SaveError::NothingToSave);
        }
        let word = self
            .session
            .current()
            .map(|w| w.word.clone())
            .ok_or(SaveError::NoCurrentWord)?;

        self.store.save_correction(&word, &correction)?;
        self.session.correct_current(&correction);
        log::info!("Saved correction for {:?}", word);
        Ok(())
    }

    /// Saves `edits` as a change to what the current word shows: blank or `_`
    /// fields keep the displayed value, so one attribute can be fixed without
    /// retyping the other two.
    pub fn amend_current(&mut self, edits: &UserJudgment) -> Result<(), SaveError> {
        if edits.is_unedited() {
            return Err(SaveError::NothingToSave);
        }
        let correction = self
            .session
            .current()
            .map(|w| edits.amend(w.view()))
            .ok_or(SaveError::NoCurrentWord)?;
        self.save_correction(&correction)
    }

    pub fn current(&self) -> Option<&AnalyzedWord> {
        self.session.current()
    }

    pub fn advance(&mut self, step: isize) -> Option<&AnalyzedWord> {
        self.session.advance(step)
    }

    pub fn session(&self) -> &ReviewSession {
        &self.session
    }

    pub fn word_count(&self) -> usize {
        self.session.len()
    }

    pub fn is_store_available(&self) -> bool {
        self.store.is_available()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
