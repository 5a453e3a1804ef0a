//! Show record definition.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Id carried by a record before the store assigns a real one.
pub const PLACEHOLDER_ID: i64 = -1;

/// A single tracked show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Store-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Episodes watched so far
    pub episodes_seen: EpisodesSeen,
}

impl Show {
    /// Creates a record that has not been stored yet.
    pub fn new(name: impl Into<String>, episodes_seen: impl Into<EpisodesSeen>) -> Self {
        Self {
            id: PLACEHOLDER_ID,
            name: name.into(),
            episodes_seen: episodes_seen.into(),
        }
    }
}

/// Episode count as it was stored.
///
/// Seeded records carry integers. Values taken from a query string are kept
/// as the raw text the client sent, so a record created over HTTP reports
/// `"3"` rather than `3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EpisodesSeen {
    /// Integer count
    Count(i64),
    /// Uncoerced text
    Text(String),
}

impl EpisodesSeen {
    /// Returns the numeric count, or `None` for text values.
    pub fn count(&self) -> Option<i64> {
        match self {
            EpisodesSeen::Count(n) => Some(*n),
            EpisodesSeen::Text(_) => None,
        }
    }
}

impl From<i64> for EpisodesSeen {
    fn from(n: i64) -> Self {
        EpisodesSeen::Count(n)
    }
}

impl From<String> for EpisodesSeen {
    fn from(s: String) -> Self {
        EpisodesSeen::Text(s)
    }
}

impl From<&str> for EpisodesSeen {
    fn from(s: &str) -> Self {
        EpisodesSeen::Text(s.to_string())
    }
}

impl fmt::Display for EpisodesSeen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpisodesSeen::Count(n) => write!(f, "{}", n),
            EpisodesSeen::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_episodes_seen_keeps_stored_shape() {
        let counted: Show = serde_json::from_value(json!({
            "id": 1,
            "name": "Naruto",
            "episodes_seen": 220
        }))
        .unwrap();
        assert_eq!(counted.episodes_seen, EpisodesSeen::Count(220));
        assert_eq!(counted.episodes_seen.count(), Some(220));

        let text: Show = serde_json::from_value(json!({
            "id": 2,
            "name": "Foo",
            "episodes_seen": "3"
        }))
        .unwrap();
        assert_eq!(text.episodes_seen, EpisodesSeen::Text("3".to_string()));
        assert_eq!(text.episodes_seen.count(), None);

        // Text is written back as text, not coerced
        assert_eq!(
            serde_json::to_value(&text).unwrap(),
            json!({"id": 2, "name": "Foo", "episodes_seen": "3"})
        );
    }

    #[test]
    fn test_new_show_uses_placeholder_id() {
        let show = Show::new("Black Mirror", 3i64);
        assert_eq!(show.id, PLACEHOLDER_ID);
        assert_eq!(show.episodes_seen.to_string(), "3");
    }

    #[test]
    fn test_rejects_non_integer_episode_count() {
        let result: Result<Show, _> = serde_json::from_value(json!({
            "id": 1,
            "name": "Foo",
            "episodes_seen": 2.5
        }));
        assert!(result.is_err());
    }
}
