// File: src/overlay.rs
use crate::core::types::AnalyzedWord;
use crate::persistence::CorrectionStore;

/// Attaches stored corrections to analyzed words, matching on exact word text.
///
/// Words without a stored correction keep whatever `user` they already had, so
/// applying the overlay again against an unchanged store changes nothing. An
/// unavailable store finds nothing and leaves the system judgments standing.
pub fn apply_corrections<S: CorrectionStore + ?Sized>(words: &mut [AnalyzedWord], store: &S) -> usize {
    let mut attached = 0;
    for word in words.iter_mut() {
        if let Some(correction) = store.find_correction(&word.word) {
            word.user = Some(correction);
            attached += 1;
        }
    }
    attached
}
