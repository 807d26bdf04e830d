use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::form::form_model::{FieldResult, FormPhase};

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub step: u64,

    pub event: String,
    pub target: Option<String>,

    pub form_phase: String,

    pub field_results: Vec<String>,

    pub decision: Option<String>,
    pub view_fingerprint: Option<String>,
}

impl TraceEvent {
    pub fn now(step: u64, event: &str, phase: &FormPhase) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            step,
            event: event.to_string(),
            target: None,
            form_phase: format!("{:?}", phase),
            field_results: vec![],
            decision: None,
            view_fingerprint: None,
        }
    }

    pub fn with_target(mut self, target: impl ToString) -> Self {
        self.target = Some(target.to_string());
        self
    }

    pub fn with_field_results(mut self, results: &[FieldResult]) -> Self {
        self.field_results = results
            .iter()
            .map(|r| match &r.message {
                Some(msg) => format!("{:?}: {}", r.field, msg),
                None => format!("{:?}: ok", r.field),
            })
            .collect();
        self
    }

    pub fn with_decision(mut self, decision: impl ToString) -> Self {
        self.decision = Some(decision.to_string());
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: Option<String>) -> Self {
        self.view_fingerprint = fingerprint;
        self
    }
}
