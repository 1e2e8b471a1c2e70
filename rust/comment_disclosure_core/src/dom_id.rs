//! Compatibility with the compound element ids rendered by existing markup.
//!
//! Controls carry ids like `text-12` or `post_12` whose positional segment is
//! the thread key. The "show more" control instead carries a space separated
//! class-like id, `"more-button question-12"`, naming the parent type and key.

use serde::{Deserialize, Serialize};
use crate::command::Element;
use crate::comments::{CommentId, ThreadId};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdScheme {
    pub delimiter: char,
    /// Segment index holding the thread key.
    pub segment: usize,
}

impl IdScheme {
    /// Question comment widget: `text-12`, `post-12`.
    pub const COMMENTS: IdScheme = IdScheme { delimiter: '-', segment: 1 };
    /// Leaderboard widget: `text_12`, `post_12`.
    pub const LEADERBOARD: IdScheme = IdScheme { delimiter: '_', segment: 1 };
}

impl Default for IdScheme {
    fn default() -> Self { IdScheme::COMMENTS }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandTarget {
    pub parent_type: String,
    pub thread_id: ThreadId,
}

fn non_empty(segment: Option<&str>) -> Option<&str> {
    segment.filter(|s| !s.is_empty())
}

pub fn parse_thread_key(raw: &str, scheme: &IdScheme) -> Result<ThreadId> {
    let key = non_empty(raw.split(scheme.delimiter).nth(scheme.segment))
        .ok_or_else(|| Error::malformed(raw, "missing thread key segment"))?;
    Ok(ThreadId::new(key))
}

/// Parses a comment node id such as `comment-12-7` into its thread and comment keys.
pub fn parse_comment_node(raw: &str, scheme: &IdScheme) -> Result<(ThreadId, CommentId)> {
    let mut parts = raw.split(scheme.delimiter).skip(scheme.segment);
    let thread = non_empty(parts.next()).ok_or_else(|| Error::malformed(raw, "missing thread key segment"))?;
    let comment = non_empty(parts.next()).ok_or_else(|| Error::malformed(raw, "missing comment key segment"))?;
    Ok((ThreadId::new(thread), CommentId::new(comment)))
}

pub fn parse_expand_target(raw: &str) -> Result<ExpandTarget> {
    let token = raw
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| Error::malformed(raw, "missing object type/id token"))?;
    let mut parts = token.split('-');
    let parent_type = non_empty(parts.next()).ok_or_else(|| Error::malformed(raw, "missing object type"))?;
    let key = non_empty(parts.next()).ok_or_else(|| Error::malformed(raw, "missing object id"))?;
    Ok(ExpandTarget { parent_type: parent_type.to_string(), thread_id: ThreadId::new(key) })
}

impl Element {
    /// Element id in the form the existing markup renders it.
    pub fn dom_id(&self, scheme: &IdScheme) -> String {
        let d = scheme.delimiter;
        match self {
            Element::PostControl { thread_id } => format!("post{d}{thread_id}"),
            Element::Draft { thread_id } => format!("text{d}{thread_id}"),
            Element::ShowMore { thread_id } => format!("more{d}{thread_id}"),
            Element::Comment { thread_id, comment_id } => format!("comment{d}{thread_id}{d}{comment_id}"),
            Element::Field { name } => name.clone(),
            Element::FieldErrors { name } => format!("{name}-errors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_widget_schemes() {
        assert_eq!(parse_thread_key("text-12", &IdScheme::COMMENTS).unwrap(), ThreadId::new("12"));
        assert_eq!(parse_thread_key("post_12", &IdScheme::LEADERBOARD).unwrap(), ThreadId::new("12"));
        // extra segments are ignored, as with a positional split
        assert_eq!(parse_thread_key("text-12-x", &IdScheme::COMMENTS).unwrap(), ThreadId::new("12"));
    }

    #[test]
    fn wrong_delimiter_is_malformed() {
        let err = parse_thread_key("text_12", &IdScheme::COMMENTS).unwrap_err();
        assert!(matches!(err, Error::MalformedId { .. }));
        assert!(parse_thread_key("text-", &IdScheme::COMMENTS).is_err());
        assert!(parse_thread_key("", &IdScheme::COMMENTS).is_err());
    }

    #[test]
    fn comment_node() {
        let (t, c) = parse_comment_node("comment-12-7", &IdScheme::COMMENTS).unwrap();
        assert_eq!((t.as_str(), c.as_str()), ("12", "7"));
        assert!(parse_comment_node("comment-12", &IdScheme::COMMENTS).is_err());
    }

    #[test]
    fn expand_target() {
        let t = parse_expand_target("more-button question-12").unwrap();
        assert_eq!(t.parent_type, "question");
        assert_eq!(t.thread_id, ThreadId::new("12"));
        assert!(parse_expand_target("more-button").is_err());
        assert!(parse_expand_target("more-button question").is_err());
        assert!(parse_expand_target("more-button -12").is_err());
    }

    #[test]
    fn rendered_ids_round_trip_through_parser() {
        let scheme = IdScheme::LEADERBOARD;
        let post = Element::PostControl { thread_id: ThreadId::new("40") }.dom_id(&scheme);
        assert_eq!(post, "post_40");
        assert_eq!(parse_thread_key(&post, &scheme).unwrap(), ThreadId::new("40"));
        let node = Element::Comment { thread_id: ThreadId::new("40"), comment_id: CommentId::new("2") };
        assert_eq!(node.dom_id(&IdScheme::COMMENTS), "comment-40-2");
    }
}
