//! Required-field validation for the game answer form.

use serde::{Deserialize, Serialize};
use crate::command::{Command, Element};

pub const REQUIRED_MESSAGE: &str = "This is a required question";
pub const ERROR_CLASS: &str = "has-error";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(default)]
    pub value: String,
    /// The input already carried a server-rendered value.
    #[serde(default)]
    pub prefilled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome")]
pub enum Validation {
    Submit,
    Blocked { offenders: Vec<String>, commands: Vec<Command> },
}

impl Validation {
    pub fn should_submit(&self) -> bool { matches!(self, Validation::Submit) }
}

pub fn error_list_html(message: &str) -> String {
    format!("<ul class=\"errorlist\"><li>{}</li></ul>", html_escape::encode_text(message))
}

pub fn validate_required(fields: &[FormField]) -> Validation {
    let offenders: Vec<String> = fields
        .iter()
        .filter(|f| !f.prefilled && f.value.trim().is_empty())
        .map(|f| f.name.clone())
        .collect();
    let Some(first) = offenders.first() else { return Validation::Submit };

    let mut commands = Vec::with_capacity(offenders.len() * 2 + 1);
    for name in &offenders {
        commands.push(Command::AddClass { target: Element::Field { name: name.clone() }, class: ERROR_CLASS.to_string() });
        commands.push(Command::SetElementHtml {
            target: Element::FieldErrors { name: name.clone() },
            html: error_list_html(REQUIRED_MESSAGE),
        });
    }
    commands.push(Command::ScrollIntoView { target: Element::Field { name: first.clone() } });
    Validation::Blocked { offenders, commands }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, value: &str) -> FormField {
        FormField { name: name.into(), value: value.into(), prefilled: false }
    }

    #[test]
    fn all_answered_submits() {
        assert!(validate_required(&[field("q1", "Paris"), field("q2", "42")]).should_submit());
        assert!(validate_required(&[]).should_submit());
    }

    #[test]
    fn blank_answers_block_and_scroll_to_first() {
        let v = validate_required(&[field("q1", "ok"), field("q2", "  "), field("q3", "")]);
        let Validation::Blocked { offenders, commands } = v else { panic!("expected blocked") };
        assert_eq!(offenders, vec!["q2", "q3"]);
        assert_eq!(commands.len(), 5);
        assert_eq!(commands.last(), Some(&Command::ScrollIntoView { target: Element::Field { name: "q2".into() } }));
        assert!(commands.contains(&Command::SetElementHtml {
            target: Element::FieldErrors { name: "q3".into() },
            html: "<ul class=\"errorlist\"><li>This is a required question</li></ul>".into(),
        }));
    }

    #[test]
    fn prefilled_fields_skipped() {
        let mut f = field("q1", "");
        f.prefilled = true;
        assert!(validate_required(&[f]).should_submit());
    }

    #[test]
    fn message_is_escaped() {
        assert_eq!(error_list_html("a < b"), "<ul class=\"errorlist\"><li>a &lt; b</li></ul>");
    }
}
