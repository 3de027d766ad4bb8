//! Action controls
//!
//! Renderers never know how an action reaches the dispatcher. They ask the
//! injected [`ActionBinder`] for a control and place it in the fragment.

use askama::Template;

use crate::commands::action::Action;
use crate::view::html::escape;
use crate::view::render;

struct HiddenInput {
    name: String,
    value: String,
}

#[derive(Template)]
#[template(path = "action_form.html")]
struct ActionForm {
    action: String,
    inputs: Vec<HiddenInput>,
    class: String,
    label: String,
}

#[derive(Template)]
#[template(path = "disabled_control.html")]
struct DisabledControl {
    class: String,
    label: String,
}

/// Renders the control that triggers an action
pub trait ActionBinder: Send + Sync {
    /// A control labelled `label` that triggers `action` when activated
    fn control(&self, action: &Action, label: &str, class: &str) -> String;
}

/// Binds actions to HTML form posts on `{prefix}/{kind}`
///
/// Each form carries a `returnTo` field so the dashboard can send the operator
/// back to the page the action came from.
#[derive(Debug, Clone)]
pub struct FormBinder {
    prefix: String,
    return_to: String,
}

impl FormBinder {
    pub fn new(prefix: impl Into<String>, return_to: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().trim_end_matches('/').to_string(),
            return_to: return_to.into(),
        }
    }
}

impl ActionBinder for FormBinder {
    fn control(&self, action: &Action, label: &str, class: &str) -> String {
        let mut inputs: Vec<HiddenInput> = action
            .fields()
            .into_iter()
            .map(|(name, value)| HiddenInput {
                name: escape(name),
                value: escape(&value),
            })
            .collect();
        inputs.push(HiddenInput {
            name: "returnTo".to_string(),
            value: escape(&self.return_to),
        });

        render(&ActionForm {
            action: escape(&format!("{}/{}", self.prefix, action.kind().as_str())),
            inputs,
            class: escape(class),
            label: escape(label),
        })
    }
}

/// A control that cannot be activated
pub fn disabled_control(label: &str, class: &str) -> String {
    render(&DisabledControl {
        class: escape(class),
        label: escape(label),
    })
}
