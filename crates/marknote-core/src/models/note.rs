//! Note model

use std::collections::HashSet;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

static MARKDOWN_SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:#{1,6}\s+|>\s*|[-*+]\s+(?:\[[ xX]\]\s+)?|\d+[.)]\s+)")
        .expect("valid markdown prefix regex")
});
static INLINE_MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*_`~]+").expect("valid inline markup regex"));

/// A note identifier: the creation time in Unix milliseconds, bumped when needed
/// so that ids stay unique within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wrap a raw id value
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Allocate an id from `now_ms` that none of `taken` holds.
    ///
    /// Ids normally stay strictly above the current maximum. Once that would
    /// overflow, the lowest unused non-negative value is handed out instead.
    #[must_use]
    pub fn fresh(now_ms: i64, taken: &[Self]) -> Self {
        let Some(max) = taken.iter().max() else {
            return Self(now_ms);
        };
        if now_ms > max.0 {
            return Self(now_ms);
        }

        match max.0.checked_add(1) {
            Some(next) => Self(next),
            None => {
                let used = taken.iter().map(|id| id.0).collect::<HashSet<_>>();
                (0..=i64::MAX)
                    .find(|candidate| !used.contains(candidate))
                    .map_or(Self(i64::MIN), Self)
            }
        }
    }

    /// Raw integer value
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Creation time encoded in the id, if it is a valid timestamp
    #[must_use]
    pub fn created_at(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A markdown note together with its HTML rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Raw markdown content
    pub content: String,
    /// HTML rendering of `content`
    /// Missing in older blobs; regenerated when the store opens.
    #[serde(rename = "renderedContent", alias = "htmlContent", default)]
    pub rendered_content: String,
}

impl Note {
    /// Build a note from already-rendered parts
    #[must_use]
    pub fn new(
        id: NoteId,
        content: impl Into<String>,
        rendered_content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            rendered_content: rendered_content.into(),
        }
    }

    /// Get first non-blank line as plain text, truncated to `max_len` characters
    #[must_use]
    pub fn title_preview(&self, max_len: usize) -> String {
        let first_line = self
            .content
            .lines()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("");
        let stripped = MARKDOWN_SYMBOL_RE.replace(first_line, "");
        let stripped = INLINE_MARKUP_RE.replace_all(&stripped, "");
        let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

        if collapsed.chars().count() <= max_len {
            collapsed
        } else {
            let mut truncated = collapsed
                .chars()
                .take(max_len.saturating_sub(3))
                .collect::<String>();
            truncated.push_str("...");
            truncated
        }
    }

}

/// Whitespace-only text is treated as no content at all.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
