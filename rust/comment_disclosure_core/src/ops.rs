//! Controller operations. Each one mutates the registry and returns the
//! presentation commands the binding layer should apply, in order.

use tracing::{debug, trace};

use crate::command::{Command, Element, HIDEABLE_CLASS, IS_HIDDEN_CLASS};
use crate::comments::{CommentId, ThreadId};
use crate::config::DisclosureConfig;
use crate::registry::ThreadRegistry;

pub fn view_all_label(total: usize) -> String {
    format!("View all {total} comments")
}

pub fn draft_changed(registry: &mut ThreadRegistry, thread_id: &ThreadId, text: &str) -> Vec<Command> {
    let enabled = registry.draft_mut(thread_id).set_text(text);
    vec![Command::SetControlEnabled {
        target: Element::PostControl { thread_id: thread_id.clone() },
        enabled,
    }]
}

pub fn comment_arrived(
    registry: &mut ThreadRegistry,
    config: &DisclosureConfig,
    thread_id: &ThreadId,
    comment_id: CommentId,
) -> Vec<Command> {
    let thread = registry.thread_mut(thread_id);
    if thread.contains(&comment_id) {
        debug!(thread = %thread_id, comment = %comment_id, "ignoring duplicate comment arrival");
        return Vec::new();
    }

    let existing = thread.len();
    let total = existing + 1;
    let mut commands = Vec::new();

    if thread.expanded {
        trace!(thread = %thread_id, "thread expanded, not collapsing");
    } else if existing < config.visible_count {
        trace!(thread = %thread_id, existing, visible_count = config.visible_count, "below disclosure threshold");
    } else {
        let show_more = Element::ShowMore { thread_id: thread_id.clone() };
        commands.push(Command::SetElementVisible { target: show_more.clone(), visible: true });
        if let Some(hidden) = thread.hide_oldest_visible() {
            trace!(thread = %thread_id, comment = %hidden, "collapsing oldest comment");
            let target = Element::Comment { thread_id: thread_id.clone(), comment_id: hidden };
            commands.push(Command::SetElementVisible { target: target.clone(), visible: false });
            commands.push(Command::AddClass { target, class: HIDEABLE_CLASS.to_string() });
        }
        commands.push(Command::SetElementText { target: show_more, text: view_all_label(total) });
    }

    thread.push_comment(comment_id);
    commands
}

/// Toggles every collapsed comment and permanently stops auto-collapse.
pub fn expand_requested(registry: &mut ThreadRegistry, thread_id: &ThreadId) -> Vec<Command> {
    let thread = registry.thread_mut(thread_id);
    let mut commands = Vec::new();
    for comment in thread.comments.iter_mut().filter(|c| c.hidden) {
        comment.revealed = !comment.revealed;
        let target = Element::Comment { thread_id: thread_id.clone(), comment_id: comment.id.clone() };
        commands.push(Command::SetElementVisible { target: target.clone(), visible: comment.revealed });
        commands.push(Command::ToggleClass { target, class: IS_HIDDEN_CLASS.to_string() });
    }
    commands.push(Command::SetElementText {
        target: Element::ShowMore { thread_id: thread_id.clone() },
        text: String::new(),
    });
    thread.expanded = true;
    commands
}

pub fn post_submitted(registry: &mut ThreadRegistry, thread_id: &ThreadId, logged_in: bool) -> Vec<Command> {
    let draft = registry.draft_mut(thread_id);
    if !draft.is_postable() {
        debug!(thread = %thread_id, "ignoring submit of blank draft");
        return Vec::new();
    }
    if !logged_in {
        return vec![Command::RequestLogin { thread_id: thread_id.clone() }];
    }
    draft.clear();
    vec![
        Command::ClearText { target: Element::Draft { thread_id: thread_id.clone() } },
        Command::SetControlEnabled {
            target: Element::PostControl { thread_id: thread_id.clone() },
            enabled: false,
        },
    ]
}
