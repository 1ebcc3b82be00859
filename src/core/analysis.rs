// src/core/analysis.rs
use crate::core::classifier::judge;
use crate::core::types::{AnalyzedWord, Candidate, TaggedToken};
use crate::error::TaggerError;
use crate::tagger::Tagger;

/// Builds the system judgment for one token from its top-ranked candidate.
/// A token without any candidate still yields a (blank) word so results stay
/// aligned with the tagger's tokens.
pub fn analyze_token(token: &TaggedToken) -> AnalyzedWord {
    let fallback = Candidate::default();
    let best = token.top().unwrap_or(&fallback);
    AnalyzedWord::new(best.text(), judge(&best.tags, &best.word_type))
}

/// Tags `sentence` once and returns one analyzed word per token, in order,
/// with no user judgment attached.
pub fn analyze_sentence<T: Tagger + ?Sized>(
    tagger: &T,
    sentence: &str,
) -> Result<Vec<AnalyzedWord>, TaggerError> {
    let tokens = tagger.analyze_sentence(sentence)?;
    Ok(tokens.iter().map(analyze_token).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Case, Gender, Pos, TagBundle};

    struct FailingTagger;

    impl Tagger for FailingTagger {
        fn analyze_sentence(&self, _text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
            Err(TaggerError::Failed("offline".into()))
        }
    }

    struct FixedTagger(Vec<TaggedToken>);

    impl Tagger for FixedTagger {
        fn analyze_sentence(&self, _text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
            Ok(self.0.clone())
        }
    }

    fn candidate(word: &str, tags: Vec<&str>, word_type: &str) -> Candidate {
        Candidate {
            word: Some(word.to_string()),
            token: None,
            tags: TagBundle::from(tags),
            word_type: word_type.to_string(),
        }
    }

    #[test]
    fn only_the_top_candidate_is_classified() {
        let token = TaggedToken::Ranked(vec![
            candidate("كتب", vec!["فعل", "مبني"], "Verb"),
            candidate("كتب", vec!["اسم", "مرفوع", "مؤنث"], "Noun"),
        ]);
        let word = analyze_token(&token);
        assert_eq!(word.word, "كتب");
        assert_eq!(word.system.pos, Pos::Verb);
        assert_eq!(word.system.i3rab, Case::Indeclinable);
        assert_eq!(word.system.gender, Gender::Undetermined);
        assert!(word.user.is_none());
    }

    #[test]
    fn malformed_tokens_are_kept_in_place() {
        let tagger = FixedTagger(vec![
            TaggedToken::Ranked(vec![]),
            TaggedToken::Single(Candidate::default()),
            TaggedToken::Single(candidate("في", vec!["حرف"], "")),
        ]);
        let words = analyze_sentence(&tagger, "x y في").unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].word, "");
        assert_eq!(words[0].system.pos, Pos::Undetermined);
        assert_eq!(words[1].system.i3rab, Case::Unknown);
        assert_eq!(words[2].system.pos, Pos::Particle);
    }

    #[test]
    fn tagger_faults_are_surfaced() {
        assert!(matches!(
            analyze_sentence(&FailingTagger, "كتب"),
            Err(TaggerError::Failed(_))
        ));
    }

    #[test]
    fn analysis_is_repeatable() {
        let tagger = FixedTagger(vec![TaggedToken::Single(candidate(
            "الطالب",
            vec!["اسم", "مرفوع", "مذكر"],
            "Noun",
        ))]);
        assert_eq!(
            analyze_sentence(&tagger, "الطالب").unwrap(),
            analyze_sentence(&tagger, "الطالب").unwrap()
        );
    }
}
