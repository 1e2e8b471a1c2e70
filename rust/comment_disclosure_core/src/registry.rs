//! Keyed registry of the threads and drafts on the current view.

use std::collections::HashMap;

use crate::comments::{Thread, ThreadId, ThreadSeed};
use crate::draft::Draft;

#[derive(Debug, Default)]
pub struct ThreadRegistry {
    threads: HashMap<ThreadId, Thread>,
    drafts: HashMap<ThreadId, Draft>,
}

impl ThreadRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a server-rendered thread, replacing any earlier state for the key.
    pub fn register(&mut self, thread_id: ThreadId, seed: &ThreadSeed) -> Option<Thread> {
        let thread = Thread::from_seed(thread_id.clone(), seed);
        self.threads.insert(thread_id, thread)
    }

    pub fn thread(&self, thread_id: &ThreadId) -> Option<&Thread> { self.threads.get(thread_id) }

    /// Threads come into being the first time an event names them.
    pub fn thread_mut(&mut self, thread_id: &ThreadId) -> &mut Thread {
        self.threads
            .entry(thread_id.clone())
            .or_insert_with(|| Thread::new(thread_id.clone()))
    }

    pub fn draft(&self, thread_id: &ThreadId) -> Option<&Draft> { self.drafts.get(thread_id) }

    pub fn draft_mut(&mut self, thread_id: &ThreadId) -> &mut Draft {
        self.drafts
            .entry(thread_id.clone())
            .or_insert_with(|| Draft::new(thread_id.clone()))
    }

    pub fn remove(&mut self, thread_id: &ThreadId) -> Option<Thread> {
        self.drafts.remove(thread_id);
        self.threads.remove(thread_id)
    }

    pub fn clear(&mut self) {
        self.threads.clear();
        self.drafts.clear();
    }

    pub fn len(&self) -> usize { self.threads.len() }
    pub fn is_empty(&self) -> bool { self.threads.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::CommentId;

    #[test]
    fn implicit_creation_and_removal() {
        let mut r = ThreadRegistry::new();
        let id = ThreadId::new("5");
        assert!(r.thread(&id).is_none());
        r.thread_mut(&id).push_comment(CommentId::new("a"));
        r.draft_mut(&id).set_text("x");
        assert_eq!(r.len(), 1);
        assert_eq!(r.remove(&id).map(|t| t.len()), Some(1));
        assert!(r.draft(&id).is_none());
        assert!(r.is_empty());
    }

    #[test]
    fn register_replaces() {
        let mut r = ThreadRegistry::new();
        let id = ThreadId::new("5");
        r.thread_mut(&id).expanded = true;
        let seed = ThreadSeed { comments: vec![CommentId::new("a")], hidden: 0 };
        let old = r.register(id.clone(), &seed);
        assert!(old.map(|t| t.expanded).unwrap_or(false));
        assert!(!r.thread(&id).map(|t| t.expanded).unwrap_or(true));
    }
}
