// src/core/classifier.rs
use crate::core::normalizer::normalize;
use crate::core::types::{Case, Gender, Pos, SystemJudgment, TagBundle};

/// A POS rule fires when the word-type hint contains `hint`
/// or the normalized tags contain `tag`.
pub struct PosRule {
    pub hint: &'static str,
    pub tag: &'static str,
    pub pos: Pos,
}

/// Checked top to bottom; the first rule that fires wins.
pub const POS_RULES: &[PosRule] = &[
    PosRule { hint: "Verb", tag: "فعل", pos: Pos::Verb },
    PosRule { hint: "Noun", tag: "اسم", pos: Pos::Noun },
    PosRule { hint: "Particle", tag: "حرف", pos: Pos::Particle },
];

/// Checked in order; a bundle carrying several markers resolves to the earliest.
pub const CASE_MARKERS: &[(&str, Case)] = &[
    ("مرفوع", Case::Nominative),
    ("منصوب", Case::Accusative),
    ("مجرور", Case::Genitive),
    ("مجزوم", Case::Jussive),
    ("مبني", Case::Indeclinable),
];

// Feminine first.
pub const GENDER_MARKERS: &[(&str, Gender)] = &[
    ("مؤنث", Gender::Feminine),
    ("مذكر", Gender::Masculine),
];

fn first_marker<T: Copy>(normalized: &str, markers: &[(&str, T)]) -> Option<T> {
    markers
        .iter()
        .find(|(marker, _)| normalized.contains(marker))
        .map(|&(_, label)| label)
}

pub fn classify_pos(tags: &TagBundle, word_type: &str) -> Pos {
    let normalized = normalize(tags);
    POS_RULES
        .iter()
        .find(|rule| word_type.contains(rule.hint) || normalized.contains(rule.tag))
        .map_or(Pos::Undetermined, |rule| rule.pos)
}

pub fn classify_case(tags: &TagBundle) -> Case {
    first_marker(&normalize(tags), CASE_MARKERS).unwrap_or(Case::Unknown)
}

pub fn classify_gender(tags: &TagBundle) -> Gender {
    first_marker(&normalize(tags), GENDER_MARKERS).unwrap_or(Gender::Undetermined)
}

pub fn judge(tags: &TagBundle, word_type: &str) -> SystemJudgment {
    SystemJudgment {
        pos: classify_pos(tags, word_type),
        i3rab: classify_case(tags),
        gender: classify_gender(tags),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: &str) -> TagBundle {
        TagBundle::Scalar(s.to_string())
    }

    #[test]
    fn every_case_marker_maps_to_its_label() {
        for &(marker, case) in CASE_MARKERS {
            assert_eq!(classify_case(&scalar(marker)), case, "marker {marker}");
            assert_eq!(case.label(), marker);
        }
    }

    #[test]
    fn every_gender_marker_maps_to_its_label() {
        for &(marker, gender) in GENDER_MARKERS {
            assert_eq!(classify_gender(&scalar(marker)), gender);
            assert_eq!(gender.label(), marker);
        }
    }

    #[test]
    fn every_pos_rule_fires_on_hint_or_tag() {
        for rule in POS_RULES {
            assert_eq!(classify_pos(&TagBundle::Absent, rule.hint), rule.pos);
            assert_eq!(classify_pos(&scalar(rule.tag), ""), rule.pos);
            assert_eq!(rule.pos.label(), rule.tag);
        }
    }

    #[test]
    fn earliest_case_marker_wins() {
        let tags = TagBundle::from(vec!["منصوب", "مرفوع"]);
        assert_eq!(classify_case(&tags), Case::Nominative);

        let tags = TagBundle::from(vec!["مبني", "مجزوم"]);
        assert_eq!(classify_case(&tags), Case::Jussive);
    }

    #[test]
    fn feminine_shadows_masculine() {
        let tags = TagBundle::from(vec!["مذكر", "مؤنث"]);
        assert_eq!(classify_gender(&tags), Gender::Feminine);
    }

    #[test]
    fn hint_and_tags_are_ored_per_rule() {
        // A verb hint outranks noun tags.
        assert_eq!(classify_pos(&scalar("اسم"), "Verb"), Pos::Verb);
        // Noun tags outrank a particle hint.
        assert_eq!(classify_pos(&scalar("اسم"), "Particle"), Pos::Noun);
        assert_eq!(classify_pos(&scalar("حرف جر"), "Prep"), Pos::Particle);
    }

    #[test]
    fn no_marker_yields_sentinels() {
        for tags in [
            TagBundle::Absent,
            TagBundle::Sequence(vec![]),
            scalar("ضمير:متصل"),
            scalar("noun"),
        ] {
            assert_eq!(classify_pos(&tags, ""), Pos::Undetermined);
            assert_eq!(classify_case(&tags), Case::Unknown);
            assert_eq!(classify_gender(&tags), Gender::Undetermined);
        }
    }

    #[test]
    fn judge_combines_all_three() {
        let tags = TagBundle::from(vec!["اسم", "مجرور", "مؤنث"]);
        assert_eq!(
            judge(&tags, "Noun"),
            SystemJudgment {
                pos: Pos::Noun,
                i3rab: Case::Genitive,
                gender: Gender::Feminine,
            }
        );
    }
}
