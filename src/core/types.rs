// src/core/types.rs
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Raw tag output of the tagger for one candidate analysis.
/// The tagger does not commit to a schema, so any JSON shape is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum TagBundle {
    #[default]
    Absent,
    Scalar(String),
    Sequence(Vec<String>),
}

impl From<serde_json::Value> for TagBundle {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => TagBundle::Absent,
            Value::String(s) => TagBundle::Scalar(s),
            Value::Array(items) => TagBundle::Sequence(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            other => TagBundle::Scalar(other.to_string()),
        }
    }
}

impl From<Vec<&str>> for TagBundle {
    fn from(tags: Vec<&str>) -> Self {
        TagBundle::Sequence(tags.into_iter().map(str::to_string).collect())
    }
}

/// One analysis of one token as reported by the tagger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub word: Option<String>,
    /// Some tagger schemas name the surface form `token` instead of `word`.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub tags: TagBundle,
    /// Coarse word-type hint, e.g. "Noun" or "Verb". May be empty.
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub word_type: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Candidate {
    /// Surface text: `word` when non-empty, else `token`, else "".
    pub fn text(&self) -> &str {
        match self.word.as_deref() {
            Some(word) if !word.is_empty() => word,
            _ => self.token.as_deref().unwrap_or(""),
        }
    }
}

/// Tagger output for a single token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TaggedToken {
    /// Candidates ordered best-first.
    Ranked(Vec<Candidate>),
    Single(Candidate),
}

impl TaggedToken {
    /// The highest-ranked candidate. Lower-ranked alternatives are never consulted.
    pub fn top(&self) -> Option<&Candidate> {
        match self {
            TaggedToken::Ranked(candidates) => candidates.first(),
            TaggedToken::Single(candidate) => Some(candidate),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    Verb,
    Noun,
    Particle,
    Undetermined,
}

impl Pos {
    pub fn label(self) -> &'static str {
        match self {
            Pos::Verb => "فعل",
            Pos::Noun => "اسم",
            Pos::Particle => "حرف",
            Pos::Undetermined => "غير محدد",
        }
    }
}

/// Grammatical case/mood (i3rab).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Nominative,
    Accusative,
    Genitive,
    Jussive,
    /// Mabni: the word does not inflect for case.
    Indeclinable,
    Unknown,
}

impl Case {
    pub fn label(self) -> &'static str {
        match self {
            Case::Nominative => "مرفوع",
            Case::Accusative => "منصوب",
            Case::Genitive => "مجرور",
            Case::Jussive => "مجزوم",
            Case::Indeclinable => "مبني",
            Case::Unknown => "غير معروف",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Feminine,
    Masculine,
    Undetermined,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Feminine => "مؤنث",
            Gender::Masculine => "مذكر",
            Gender::Undetermined => "غير محدد",
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        // Serialized as the Arabic label shown to reviewers.
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        })*
    };
}

display_label!(Pos, Case, Gender);

/// Attributes derived by the classifiers for one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemJudgment {
    pub pos: Pos,
    pub i3rab: Case,
    pub gender: Gender,
}

/// A reviewer's override of all three attributes. Fields are free-form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserJudgment {
    pub pos: String,
    pub i3rab: String,
    pub gender: String,
}

impl UserJudgment {
    pub fn new(pos: &str, i3rab: &str, gender: &str) -> Self {
        Self {
            pos: pos.to_string(),
            i3rab: i3rab.to_string(),
            gender: gender.to_string(),
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self::new(self.pos.trim(), self.i3rab.trim(), self.gender.trim())
    }

    pub fn is_blank(&self) -> bool {
        [&self.pos, &self.i3rab, &self.gender]
            .iter()
            .all(|field| field.trim().is_empty())
    }

    /// True when no field is edited: each is blank or [`KEEP_FIELD`].
    pub fn is_unedited(&self) -> bool {
        [&self.pos, &self.i3rab, &self.gender]
            .iter()
            .all(|field| is_kept(field))
    }

    /// Treats `self` as an edit of `view`: blank and [`KEEP_FIELD`] fields take
    /// the value currently shown, the rest are trimmed.
    pub fn amend(&self, view: JudgmentView<'_>) -> Self {
        let pick = |edit: &str, shown: &str| -> String {
            let value = if is_kept(edit) { shown } else { edit.trim() };
            value.to_string()
        };
        Self {
            pos: pick(&self.pos, view.pos),
            i3rab: pick(&self.i3rab, view.i3rab),
            gender: pick(&self.gender, view.gender),
        }
    }
}

/// Placeholder for "leave this field as shown" in an edit.
pub const KEEP_FIELD: &str = "_";

fn is_kept(field: &str) -> bool {
    let field = field.trim();
    field.is_empty() || field == KEEP_FIELD
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedWord {
    pub word: String,
    pub system: SystemJudgment,
    pub user: Option<UserJudgment>,
}

/// The attributes a consumer should show for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JudgmentView<'a> {
    pub pos: &'a str,
    pub i3rab: &'a str,
    pub gender: &'a str,
}

impl AnalyzedWord {
    pub fn new(word: impl Into<String>, system: SystemJudgment) -> Self {
        Self {
            word: word.into(),
            system,
            user: None,
        }
    }

    pub fn is_corrected(&self) -> bool {
        self.user.is_some()
    }

    /// A user judgment replaces all three system fields at once; there is no
    /// per-field fallback.
    pub fn view(&self) -> JudgmentView<'_> {
        match &self.user {
            Some(user) => JudgmentView {
                pos: &user.pos,
                i3rab: &user.i3rab,
                gender: &user.gender,
            },
            None => JudgmentView {
                pos: self.system.pos.label(),
                i3rab: self.system.i3rab.label(),
                gender: self.system.gender.label(),
            },
        }
    }
}
