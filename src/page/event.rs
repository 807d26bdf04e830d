use serde::{Deserialize, Serialize};

use crate::form::form_model::{FieldResult, SubmitOutcome};
use crate::view::view_model::ElementId;

/// A user action delivered by the page loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PageEvent {
    Click { target: ElementId },
    PointerEnter { target: ElementId },
    PointerLeave { target: ElementId },
    /// A keystroke in a text control; `value` is the control's full new value
    Input { target: ElementId, value: String },
    Blur { target: ElementId },
    /// A committed value change, e.g. picking a date
    Change { target: ElementId, value: String },
    Submit { target: ElementId },
}

impl PageEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PageEvent::Click { .. } => "click",
            PageEvent::PointerEnter { .. } => "pointer_enter",
            PageEvent::PointerLeave { .. } => "pointer_leave",
            PageEvent::Input { .. } => "input",
            PageEvent::Blur { .. } => "blur",
            PageEvent::Change { .. } => "change",
            PageEvent::Submit { .. } => "submit",
        }
    }

    pub fn target(&self) -> &ElementId {
        match self {
            PageEvent::Click { target }
            | PageEvent::PointerEnter { target }
            | PageEvent::PointerLeave { target }
            | PageEvent::Input { target, .. }
            | PageEvent::Blur { target }
            | PageEvent::Change { target, .. }
            | PageEvent::Submit { target } => target,
        }
    }

    pub fn click(target: &str) -> Self {
        PageEvent::Click { target: target.into() }
    }

    pub fn pointer_enter(target: &str) -> Self {
        PageEvent::PointerEnter { target: target.into() }
    }

    pub fn pointer_leave(target: &str) -> Self {
        PageEvent::PointerLeave { target: target.into() }
    }

    pub fn input(target: &str, value: &str) -> Self {
        PageEvent::Input {
            target: target.into(),
            value: value.to_string(),
        }
    }

    pub fn blur(target: &str) -> Self {
        PageEvent::Blur { target: target.into() }
    }

    pub fn change(target: &str, value: &str) -> Self {
        PageEvent::Change {
            target: target.into(),
            value: value.to_string(),
        }
    }

    pub fn submit(target: &str) -> Self {
        PageEvent::Submit { target: target.into() }
    }
}

/// What a dispatched event did.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// No handler is registered for this event on this element
    Ignored,
    MessageToggled { shown: bool },
    CupcakeGlowing,
    CupcakeResting,
    CupcakeDecorated { text: &'static str },
    KeyboardUpdated,
    ThemeToggled { dark: bool },
    FaqToggled { open: bool },
    ValueStored,
    FieldValidated(FieldResult),
    Submitted(SubmitOutcome),
}
