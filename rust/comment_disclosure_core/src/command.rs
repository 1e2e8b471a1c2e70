//! Outbound presentation commands and the elements they target.

use serde::{Deserialize, Serialize};
use crate::comments::{CommentId, ThreadId};

/// CSS class marking a comment collapsed by auto-disclosure.
pub const HIDEABLE_CLASS: &str = "hideable";
/// CSS class flipped on hidden comments by the expand toggle.
pub const IS_HIDDEN_CLASS: &str = "is_hidden";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Element {
    PostControl { thread_id: ThreadId },
    Draft { thread_id: ThreadId },
    ShowMore { thread_id: ThreadId },
    Comment { thread_id: ThreadId, comment_id: CommentId },
    Field { name: String },
    FieldErrors { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    SetControlEnabled { target: Element, enabled: bool },
    SetElementVisible { target: Element, visible: bool },
    SetElementText { target: Element, text: String },
    SetElementHtml { target: Element, html: String },
    ClearText { target: Element },
    AddClass { target: Element, class: String },
    ToggleClass { target: Element, class: String },
    ScrollIntoView { target: Element },
    RequestLogin { thread_id: ThreadId },
}

impl Command {
    pub fn target(&self) -> Option<&Element> {
        match self {
            Command::SetControlEnabled { target, .. }
            | Command::SetElementVisible { target, .. }
            | Command::SetElementText { target, .. }
            | Command::SetElementHtml { target, .. }
            | Command::ClearText { target }
            | Command::AddClass { target, .. }
            | Command::ToggleClass { target, .. }
            | Command::ScrollIntoView { target } => Some(target),
            Command::RequestLogin { .. } => None,
        }
    }
}

pub fn commands_to_json(commands: &[Command]) -> String {
    serde_json::to_string(commands).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape_is_tagged() {
        let cmd = Command::SetControlEnabled {
            target: Element::PostControl { thread_id: ThreadId::new("12") },
            enabled: true,
        };
        let v: serde_json::Value = serde_json::from_str(&commands_to_json(&[cmd])).unwrap();
        assert_eq!(v[0]["type"], "SetControlEnabled");
        assert_eq!(v[0]["target"]["type"], "PostControl");
        assert_eq!(v[0]["target"]["thread_id"], "12");
        assert_eq!(v[0]["enabled"], true);
    }

    #[test]
    fn login_request_has_no_target() {
        assert!(Command::RequestLogin { thread_id: ThreadId::new("1") }.target().is_none());
    }
}
