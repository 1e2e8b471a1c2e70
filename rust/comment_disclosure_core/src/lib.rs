pub mod command;
pub mod comments;
pub mod config;
pub mod countdown;
pub mod dom_id;
pub mod draft;
pub mod error;
pub mod ops;
pub mod registry;
pub mod validation;

use tracing::debug;

pub use command::{commands_to_json, Command, Element};
pub use comments::{Comment, CommentId, Thread, ThreadId, ThreadSeed};
pub use config::DisclosureConfig;
pub use error::{Error, Result};
use registry::ThreadRegistry;

/// Disclosure state for every comment thread on one view.
#[derive(Debug, Default)]
pub struct DisclosureCore {
    pub config: DisclosureConfig,
    pub registry: ThreadRegistry,
    logged_in: bool,
}

impl DisclosureCore {
    pub fn new(config: DisclosureConfig) -> Self {
        Self { config, registry: ThreadRegistry::new(), logged_in: false }
    }

    pub fn from_config_json(json: &str) -> Result<Self> {
        Ok(Self::new(DisclosureConfig::from_json(json)?))
    }

    pub fn set_logged_in(&mut self, logged_in: bool) { self.logged_in = logged_in; }
    pub fn is_logged_in(&self) -> bool { self.logged_in }

    // Lifecycle
    pub fn register_thread(&mut self, thread_id: ThreadId, seed: &ThreadSeed) { self.registry.register(thread_id, seed); }
    pub fn register_thread_json(&mut self, thread_id: ThreadId, seed_json: &str) -> Result<()> {
        let seed: ThreadSeed = serde_json::from_str(seed_json)?;
        self.register_thread(thread_id, &seed);
        Ok(())
    }
    pub fn remove_thread(&mut self, thread_id: &ThreadId) { self.registry.remove(thread_id); }
    pub fn teardown(&mut self) { self.registry.clear(); }

    // Typed handlers
    pub fn on_draft_changed(&mut self, thread_id: &ThreadId, text: &str) -> Vec<Command> {
        ops::draft_changed(&mut self.registry, thread_id, text)
    }
    pub fn on_comment_arrived(&mut self, thread_id: &ThreadId, comment_id: CommentId) -> Vec<Command> {
        ops::comment_arrived(&mut self.registry, &self.config, thread_id, comment_id)
    }
    pub fn on_expand_requested(&mut self, thread_id: &ThreadId) -> Vec<Command> {
        ops::expand_requested(&mut self.registry, thread_id)
    }
    pub fn on_post_submitted(&mut self, thread_id: &ThreadId) -> Vec<Command> {
        ops::post_submitted(&mut self.registry, thread_id, self.logged_in)
    }

    // Handlers keyed by raw element ids. Malformed ids are dropped.
    pub fn on_draft_changed_from_dom_id(&mut self, element_id: &str, text: &str) -> Vec<Command> {
        match dom_id::parse_thread_key(element_id, &self.config.id_scheme) {
            Ok(thread_id) => self.on_draft_changed(&thread_id, text),
            Err(err) => dropped("draft edit", err),
        }
    }

    pub fn on_comment_arrived_from_dom_id(&mut self, element_id: &str) -> Vec<Command> {
        match dom_id::parse_comment_node(element_id, &self.config.id_scheme) {
            Ok((thread_id, comment_id)) => self.on_comment_arrived(&thread_id, comment_id),
            Err(err) => dropped("comment arrival", err),
        }
    }

    pub fn on_expand_requested_from_dom_id(&mut self, element_id: &str) -> Vec<Command> {
        match dom_id::parse_expand_target(element_id) {
            Ok(target) => self.on_expand_requested(&target.thread_id),
            Err(err) => dropped("expand request", err),
        }
    }

    pub fn on_post_submitted_from_dom_id(&mut self, element_id: &str) -> Vec<Command> {
        match dom_id::parse_thread_key(element_id, &self.config.id_scheme) {
            Ok(thread_id) => self.on_post_submitted(&thread_id),
            Err(err) => dropped("post submit", err),
        }
    }

    pub fn element_dom_id(&self, element: &Element) -> String { element.dom_id(&self.config.id_scheme) }
}

fn dropped(event: &str, err: Error) -> Vec<Command> {
    debug!(%err, "dropping {event}");
    Vec::new()
}
