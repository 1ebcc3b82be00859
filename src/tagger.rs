// File: src/tagger.rs
use crate::core::types::{Candidate, TaggedToken};
use crate::error::TaggerError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A morphological tagger: one entry per token of the sentence, in order.
pub trait Tagger {
    fn analyze_sentence(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn analyze_sentence(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        (**self).analyze_sentence(text)
    }
}

/// Fathatan through sukun, plus superscript alef.
fn is_tashkeel(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}')
}

fn is_edge_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '،' | '؛' | '؟' | '«' | '»' | '…')
}

/// Whitespace-tokenizing tagger backed by a JSON lexicon that maps a word form
/// to its ranked candidate analyses:
///
/// ```json
/// { "كتب": [{ "word": "كتب", "tags": ["فعل", "ماضي"], "type": "Verb" }] }
/// ```
///
/// Words missing from the lexicon come back as a single candidate with no tags.
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    entries: HashMap<String, Vec<Candidate>>,
}

impl LexiconTagger {
    pub fn new(entries: HashMap<String, Vec<Candidate>>) -> Self {
        Self { entries }
    }

    pub fn from_file(path: &Path) -> Result<Self, TaggerError> {
        let raw = fs::read_to_string(path).map_err(|source| TaggerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: HashMap<String, Vec<Candidate>> =
            serde_json::from_str(&raw).map_err(|source| TaggerError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("Loaded {} lexicon entries from {:?}", entries.len(), path);
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, word: &str) -> Option<&Vec<Candidate>> {
        self.entries.get(word).or_else(|| {
            let bare: String = word.chars().filter(|&c| !is_tashkeel(c)).collect();
            self.entries.get(&bare)
        })
    }

    fn tag_token(&self, raw: &str) -> TaggedToken {
        let word = raw.trim_matches(is_edge_punctuation);
        match self.lookup(word) {
            Some(candidates) if !candidates.is_empty() => TaggedToken::Ranked(candidates.clone()),
            _ => TaggedToken::Single(Candidate {
                token: Some(word.to_string()),
                ..Default::default()
            }),
        }
    }
}

impl Tagger for LexiconTagger {
    fn analyze_sentence(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        Ok(text
            .split_whitespace()
            .filter(|raw| !raw.chars().all(is_edge_punctuation))
            .map(|raw| self.tag_token(raw))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TagBundle;
    use std::io::Write;

    fn lexicon() -> LexiconTagger {
        let entries = serde_json::from_str(
            r#"{
                "كتب": [
                    {"word": "كتب", "tags": ["فعل", "ماضي"], "type": "Verb"},
                    {"word": "كتب", "tags": ["اسم", "جمع"], "type": "Noun"}
                ],
                "الدرس": [{"token": "الدرس", "tags": "اسم:منصوب", "type": "Noun"}]
            }"#,
        )
        .unwrap();
        LexiconTagger::new(entries)
    }

    #[test]
    fn tags_known_and_unknown_words_in_order() {
        let tokens = lexicon().analyze_sentence("كتب الطالب الدرس").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].top().unwrap().word_type, "Verb");
        let unknown = tokens[1].top().unwrap();
        assert_eq!(unknown.text(), "الطالب");
        assert_eq!(unknown.tags, TagBundle::Absent);
        assert_eq!(tokens[2].top().unwrap().text(), "الدرس");
    }

    #[test]
    fn strips_punctuation_and_diacritics() {
        let tokens = lexicon().analyze_sentence("كَتَبَ، الدرس. ؟").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].top().unwrap().word_type, "Verb");
        assert_eq!(tokens[1].top().unwrap().word_type, "Noun");
    }

    #[test]
    fn blank_text_yields_no_tokens() {
        assert!(lexicon().analyze_sentence("   ").unwrap().is_empty());
    }

    #[test]
    fn loads_lexicon_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"في": [{{"word": "في", "tags": ["حرف"], "type": "Particle"}}]}}"#)
            .unwrap();
        let tagger = LexiconTagger::from_file(file.path()).unwrap();
        assert_eq!(tagger.len(), 1);

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        write!(broken, "not json").unwrap();
        assert!(matches!(
            LexiconTagger::from_file(broken.path()),
            Err(TaggerError::Parse { .. })
        ));
    }
}
