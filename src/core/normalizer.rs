// src/core/normalizer.rs
use crate::core::types::TagBundle;

pub const TAG_DELIMITER: &str = ":";

/// Flattens a tag bundle into one searchable string.
/// Sequences are joined in order with [`TAG_DELIMITER`]; an absent bundle is "".
pub fn normalize(tags: &TagBundle) -> String {
    match tags {
        TagBundle::Absent => String::new(),
        TagBundle::Scalar(tag) => tag.clone(),
        TagBundle::Sequence(tags) => tags.join(TAG_DELIMITER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_sequences_in_order() {
        let tags = TagBundle::from(vec!["اسم", "مرفوع", "مذكر"]);
        assert_eq!(normalize(&tags), "اسم:مرفوع:مذكر");
    }

    #[test]
    fn empty_and_absent_bundles_are_empty() {
        assert_eq!(normalize(&TagBundle::Sequence(vec![])), "");
        assert_eq!(normalize(&TagBundle::Absent), "");
        assert_eq!(normalize(&TagBundle::Scalar(String::new())), "");
    }

    #[test]
    fn scalar_passes_through() {
        let tags = TagBundle::Scalar("حرف جر".into());
        assert_eq!(normalize(&tags), "حرف جر");
        assert_eq!(normalize(&tags), normalize(&tags));
    }
}
