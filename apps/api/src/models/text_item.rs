use serde::{Deserialize, Serialize};

/// Where a fetched text item came from on the user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Submission,
    Comment,
}

/// One piece of user-authored text with its community score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub text: String,
    pub source_kind: SourceKind,
    pub popularity: i64,
}

impl TextItem {
    /// Submissions are scored on title and body together; link posts have an empty body.
    pub fn submission(title: &str, selftext: &str, popularity: i64) -> Self {
        Self {
            text: format!("{title} {selftext}"),
            source_kind: SourceKind::Submission,
            popularity,
        }
    }

    pub fn comment(body: impl Into<String>, popularity: i64) -> Self {
        Self {
            text: body.into(),
            source_kind: SourceKind::Comment,
            popularity,
        }
    }
}
