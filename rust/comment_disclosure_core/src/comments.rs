//! Comment thread model: ordered comments with a hidden/visible partition.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! key_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(key: impl Into<String>) -> Self { Self(key.into()) }
            pub fn as_str(&self) -> &str { &self.0 }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
        }
    };
}

key_newtype!(ThreadId);
key_newtype!(CommentId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub created_order: usize,
    /// Collapsed out of the default view.
    pub hidden: bool,
    /// A hidden comment currently shown by the expand toggle.
    #[serde(default)]
    pub revealed: bool,
}

impl Comment {
    pub fn is_visible(&self) -> bool { !self.hidden || self.revealed }
}

/// Comments a server-rendered thread starts with, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThreadSeed {
    #[serde(default)]
    pub comments: Vec<CommentId>,
    /// How many of the oldest comments were rendered collapsed.
    #[serde(default)]
    pub hidden: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: ThreadId,
    pub comments: Vec<Comment>,
    pub expanded: bool,
}

impl Thread {
    pub fn new(id: ThreadId) -> Self {
        Self { id, comments: Vec::new(), expanded: false }
    }

    pub fn from_seed(id: ThreadId, seed: &ThreadSeed) -> Self {
        let mut thread = Self::new(id);
        for comment_id in &seed.comments {
            if !thread.contains(comment_id) {
                thread.push_comment(comment_id.clone());
            }
        }
        for comment in thread.comments.iter_mut().take(seed.hidden) {
            comment.hidden = true;
        }
        thread
    }

    pub fn len(&self) -> usize { self.comments.len() }
    pub fn is_empty(&self) -> bool { self.comments.is_empty() }

    pub fn contains(&self, id: &CommentId) -> bool {
        self.comments.iter().any(|c| &c.id == id)
    }

    pub fn push_comment(&mut self, id: CommentId) {
        let created_order = self.comments.len();
        self.comments.push(Comment { id, created_order, hidden: false, revealed: false });
    }

    /// Hides the oldest comment not already hidden and returns its id.
    pub fn hide_oldest_visible(&mut self) -> Option<CommentId> {
        let comment = self.comments.iter_mut().find(|c| !c.hidden)?;
        comment.hidden = true;
        Some(comment.id.clone())
    }

    pub fn hidden_comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter().filter(|c| c.hidden)
    }
}
