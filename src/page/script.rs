use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::page::clock::ManualClock;
use crate::page::event::{EventOutcome, PageEvent};
use crate::page::page::Page;
use crate::view::error::PageError;
use crate::view::view_model::{ElementId, View};

/// One line of an event script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    Click { target: ElementId },
    PointerEnter { target: ElementId },
    PointerLeave { target: ElementId },
    Input { target: ElementId, value: String },
    Blur { target: ElementId },
    Change { target: ElementId, value: String },
    Submit { target: ElementId },

    /// Let time pass; due timers fire
    Wait { duration_ms: u64 },

    /// Type into several inputs, in id order
    FillForm { values: BTreeMap<String, String> },
}

impl ScriptStep {
    /// The page events this step expands to.
    pub fn events(&self) -> Vec<PageEvent> {
        match self.clone() {
            ScriptStep::Click { target } => vec![PageEvent::Click { target }],
            ScriptStep::PointerEnter { target } => vec![PageEvent::PointerEnter { target }],
            ScriptStep::PointerLeave { target } => vec![PageEvent::PointerLeave { target }],
            ScriptStep::Input { target, value } => vec![PageEvent::Input { target, value }],
            ScriptStep::Blur { target } => vec![PageEvent::Blur { target }],
            ScriptStep::Change { target, value } => vec![PageEvent::Change { target, value }],
            ScriptStep::Submit { target } => vec![PageEvent::Submit { target }],
            ScriptStep::Wait { .. } => vec![],
            ScriptStep::FillForm { values } => values
                .into_iter()
                .map(|(target, value)| PageEvent::Input {
                    target: ElementId(target),
                    value,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventScript {
    #[serde(default)]
    pub name: String,

    pub steps: Vec<ScriptStep>,
}

impl EventScript {
    pub fn from_yaml_str(content: &str) -> Result<Self, PageError> {
        serde_yaml::from_str(content).map_err(|e| PageError::Script {
            context: "event script".into(),
            source: e,
        })
    }

    pub fn load(path: &str) -> Result<Self, PageError> {
        let content = std::fs::read_to_string(path).map_err(|e| PageError::Io {
            path: path.to_string(),
            source: e,
        })?;
        serde_yaml::from_str(&content).map_err(|e| PageError::Script {
            context: path.to_string(),
            source: e,
        })
    }
}

/// Per-run tally of a replay.
#[derive(Debug, Clone, Default)]
pub struct ReplayLog {
    pub events_dispatched: usize,
    pub resets_fired: usize,
    pub outcomes: Vec<EventOutcome>,
}

/// Play a script against a page on a manual clock. Stops at the first error.
pub fn run_script<V: View>(
    page: &mut Page<V, ManualClock>,
    script: &EventScript,
) -> Result<ReplayLog, PageError> {
    let mut log = ReplayLog::default();

    for step in &script.steps {
        if let ScriptStep::Wait { duration_ms } = step {
            page.clock().advance(*duration_ms);
            if page.poll_timers()? {
                log.resets_fired += 1;
            }
            continue;
        }

        // Time only moves on `wait`; `resets_fired` counts resets fired there
        for event in step.events() {
            let outcome = page.dispatch(&event)?;
            log.events_dispatched += 1;
            log.outcomes.push(outcome);
        }
    }

    Ok(log)
}
