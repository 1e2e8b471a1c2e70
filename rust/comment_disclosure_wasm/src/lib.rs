use wasm_bindgen::prelude::*;
use comment_disclosure_core::countdown::{Countdown, CountdownTick, EXPIRED_TEXT};
use comment_disclosure_core::validation::{validate_required, FormField};
use comment_disclosure_core::{commands_to_json, DisclosureCore, Element, ThreadId};

#[cfg(feature = "console-panic")]
#[wasm_bindgen(start)]
pub fn init_console_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Binding for one page's comment widgets. Every handler returns a JSON
/// array of commands for the page script to apply.
#[wasm_bindgen]
pub struct CommentWidget {
    core: DisclosureCore,
}

#[wasm_bindgen]
impl CommentWidget {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: String, logged_in: bool) -> CommentWidget {
        let mut core = DisclosureCore::from_config_json(&config_json).unwrap_or_default();
        core.set_logged_in(logged_in);
        CommentWidget { core }
    }

    pub fn set_logged_in(&mut self, logged_in: bool) { self.core.set_logged_in(logged_in) }

    // Lifecycle
    pub fn register_thread(&mut self, thread_key: String, seed_json: String) -> bool {
        self.core.register_thread_json(ThreadId::new(thread_key), &seed_json).is_ok()
    }
    pub fn remove_thread(&mut self, thread_key: String) { self.core.remove_thread(&ThreadId::new(thread_key)) }
    pub fn teardown(&mut self) { self.core.teardown() }

    // Events keyed by the target element id
    pub fn on_draft_changed(&mut self, element_id: String, text: String) -> String {
        commands_to_json(&self.core.on_draft_changed_from_dom_id(&element_id, &text))
    }
    pub fn on_comment_arrived(&mut self, element_id: String) -> String {
        commands_to_json(&self.core.on_comment_arrived_from_dom_id(&element_id))
    }
    pub fn on_expand_requested(&mut self, element_id: String) -> String {
        commands_to_json(&self.core.on_expand_requested_from_dom_id(&element_id))
    }
    pub fn on_post_submitted(&mut self, element_id: String) -> String {
        commands_to_json(&self.core.on_post_submitted_from_dom_id(&element_id))
    }

    /// Resolves a command target (as JSON) to the element id it refers to.
    pub fn element_id(&self, element_json: String) -> Option<String> {
        let element: Element = serde_json::from_str(&element_json).ok()?;
        Some(self.core.element_dom_id(&element))
    }
}

#[wasm_bindgen]
pub fn validate_answer_form(fields_json: String) -> String {
    let fields: Vec<FormField> = serde_json::from_str(&fields_json).unwrap_or_default();
    let outcome = validate_required(&fields);
    serde_json::to_string(&outcome).unwrap_or_else(|_| "{\"outcome\":\"Submit\"}".to_string())
}

#[wasm_bindgen]
pub fn should_submit_answer_form(fields_json: String) -> bool {
    let fields: Vec<FormField> = serde_json::from_str(&fields_json).unwrap_or_default();
    validate_required(&fields).should_submit()
}

/// Display strings for one countdown tick; `expired` tells the host to stop its timer.
#[wasm_bindgen]
pub fn countdown_tick(target_ms: f64, now_ms: f64, include_units: bool) -> String {
    match Countdown::new(target_ms as i64).tick(now_ms as i64) {
        CountdownTick::Running { parts } => {
            let shown = parts.display(include_units);
            serde_json::json!({ "expired": false, "days": shown.days, "hours": shown.hours, "minutes": shown.minutes, "seconds": shown.seconds }).to_string()
        }
        CountdownTick::Expired => serde_json::json!({ "expired": true, "text": EXPIRED_TEXT }).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_sanity() {
        let mut w = CommentWidget::new("{\"visible_count\":1}".into(), false);
        assert!(w.register_thread("12".into(), "{\"comments\":[\"1\"]}".into()));
        let out = w.on_comment_arrived("comment-12-2".into());
        assert!(out.contains("View all 2 comments"));
        assert_eq!(w.on_draft_changed("bogus".into(), "x".into()), "[]");
        w.on_draft_changed("text-12".into(), "hello".into());
        assert!(w.on_post_submitted("post-12".into()).contains("RequestLogin"));
    }

    #[wasm_bindgen_test]
    fn wasm_form_and_countdown() {
        assert!(!should_submit_answer_form("[{\"name\":\"q1\",\"value\":\" \"}]".into()));
        assert!(countdown_tick(0.0, 1.0, false).contains("EXPIRED"));
    }
}
