//! Reply drafts and the post control each one drives.

use serde::{Deserialize, Serialize};
use crate::comments::ThreadId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostControl {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub thread_id: ThreadId,
    pub text: String,
    pub control: PostControl,
}

impl Draft {
    pub fn new(thread_id: ThreadId) -> Self {
        Self { thread_id, text: String::new(), control: PostControl::default() }
    }

    /// Replaces the text and returns the resulting enabled state.
    pub fn set_text(&mut self, text: &str) -> bool {
        self.text = text.to_string();
        self.control.enabled = self.is_postable();
        self.control.enabled
    }

    pub fn is_postable(&self) -> bool { !self.text.trim().is_empty() }

    pub fn clear(&mut self) {
        self.text.clear();
        self.control.enabled = false;
    }
}
