mod common;

use common::utils::{default_page, fill, id, today, valid_values, visible};
use cupcake_page::form::form_model::{Field, FormPhase};
use cupcake_page::form::submit::FormController;
use cupcake_page::open_default_page;
use cupcake_page::page::clock::ManualClock;
use cupcake_page::page::event::{EventOutcome, PageEvent};
use cupcake_page::page::page::Page;
use cupcake_page::page::script::{EventScript, ScriptStep, run_script};
use cupcake_page::trace::logger::TraceLogger;
use cupcake_page::view::bindings::PageBindings;
use cupcake_page::view::error::PageError;
use cupcake_page::view::layout::{PageLayout, default_layout, ids};
use cupcake_page::view::memory::MemoryView;
use cupcake_page::view::snapshot::ViewSnapshot;
use cupcake_page::view::view_model::{Element, View};

// =========================================================================
// Bindings
// =========================================================================

#[test]
fn default_layout_binds_every_element() {
    let view = MemoryView::from_layout(&default_layout());
    let bindings = PageBindings::resolve(&view).unwrap();

    assert_eq!(bindings.faq.len(), 3);
    assert_eq!(bindings.faq[0].answer.as_str(), "faq-a1");
    assert_eq!(bindings.form.fields.len(), 5);
    assert_eq!(
        bindings.form.field(Field::OrderDetails).unwrap().error.as_str(),
        ids::ORDER_ERROR
    );
}

#[test]
fn missing_element_is_fatal_at_initialization() {
    let mut layout = default_layout();
    layout.elements.retain(|el| el.id.as_str() != ids::PHONE_ERROR);
    let view = MemoryView::from_layout(&layout);

    match Page::new(view, ManualClock::new(today()), FormController::default()) {
        Err(PageError::MissingElement { id, .. }) => assert_eq!(id, ids::PHONE_ERROR),
        Err(other) => panic!("Expected MissingElement, got {}", other),
        Ok(_) => panic!("Expected initialization to fail"),
    }
}

#[test]
fn faq_question_without_answer_fails_to_bind() {
    let mut layout = default_layout();
    layout
        .elements
        .push(Element::new("faq-orphan", "button").with_class(ids::FAQ_QUESTION_CLASS));
    let view = MemoryView::from_layout(&layout);

    assert!(matches!(
        PageBindings::resolve(&view),
        Err(PageError::MissingElement { .. })
    ));
}

#[test]
fn event_on_unknown_element_is_an_error() {
    let mut page = default_page();
    let result = page.dispatch(&PageEvent::click("no-such-button"));
    assert!(matches!(result, Err(PageError::MissingElement { .. })));
}

#[test]
fn open_default_page_uses_wall_clock() {
    let mut page = open_default_page(None).unwrap();
    let outcome = page.dispatch(&PageEvent::click(ids::THEME_TOGGLE)).unwrap();
    assert_eq!(outcome, EventOutcome::ThemeToggled { dark: true });
}

// =========================================================================
// Reset timer
// =========================================================================

#[test]
fn success_reverts_after_five_seconds() {
    let mut page = default_page();
    fill(&mut page, &valid_values());
    assert!(page.submit().unwrap().accepted);

    page.clock().advance(4999);
    assert!(!page.poll_timers().unwrap(), "Not due yet");
    assert!(visible(&page, ids::ORDER_SUCCESS));

    page.clock().advance(1);
    assert!(page.poll_timers().unwrap());
    assert!(visible(&page, ids::ORDER_FORM));
    assert!(!visible(&page, ids::ORDER_SUCCESS));
    assert_eq!(page.phase(), FormPhase::Editing);

    for field in Field::ALL {
        assert_eq!(page.view().value(&id(field.input_id())).unwrap(), "");
    }
}

#[test]
fn reset_clears_inputs_edited_during_success_window() {
    let mut page = default_page();
    fill(&mut page, &valid_values());
    page.submit().unwrap();

    page.clock().advance(1000);
    fill(&mut page, &[(Field::Name, "Grace")]);

    page.clock().advance(4000);
    assert!(page.poll_timers().unwrap());
    assert_eq!(page.view().value(&id(ids::NAME)).unwrap(), "");
}

#[test]
fn cancelled_reset_keeps_success_state() {
    let mut page = default_page();
    fill(&mut page, &valid_values());
    page.submit().unwrap();

    assert!(page.cancel_reset());
    assert!(!page.cancel_reset(), "Nothing left to cancel");

    page.clock().advance(60_000);
    assert!(!page.poll_timers().unwrap());
    assert!(visible(&page, ids::ORDER_SUCCESS));
    assert_eq!(page.phase(), FormPhase::Success { reset_due_ms: None });
}

#[test]
fn second_success_replaces_pending_reset() {
    let mut page = default_page();
    fill(&mut page, &valid_values());
    page.submit().unwrap();

    page.clock().advance(3000);
    assert!(page.submit().unwrap().accepted);
    assert_eq!(page.form().pending_reset().unwrap().due_ms, 8000);

    page.clock().advance(2000);
    assert!(!page.poll_timers().unwrap(), "Original deadline no longer applies");

    page.clock().advance(3000);
    assert!(page.poll_timers().unwrap());
}

#[test]
fn event_after_deadline_sees_reset_form() {
    let mut page = default_page();
    fill(&mut page, &valid_values());
    page.submit().unwrap();

    // No poll between the deadline and the next event
    page.clock().advance(6000);
    page.dispatch(&PageEvent::input(ids::NAME, "Grace")).unwrap();

    assert_eq!(page.view().value(&id(ids::NAME)).unwrap(), "Grace");
    assert_eq!(page.view().value(&id(ids::EMAIL)).unwrap(), "");
    assert!(visible(&page, ids::ORDER_FORM));
    assert!(!visible(&page, ids::ORDER_SUCCESS));
    assert_eq!(page.phase(), FormPhase::Editing);
}

#[test]
fn submit_after_deadline_runs_due_reset_first() {
    let mut page = default_page();
    fill(&mut page, &valid_values());
    page.submit().unwrap();

    page.clock().advance(6000);
    let outcome = page.submit().unwrap();

    assert!(!outcome.accepted, "Inputs were cleared by the overdue reset");
    assert!(page.form().pending_reset().is_none());
    assert_eq!(page.phase(), FormPhase::Editing);
    assert!(visible(&page, ids::ORDER_FORM));
}

#[test]
fn configured_reset_delay_is_honored() {
    let view = MemoryView::from_layout(&default_layout());
    let mut page = Page::new(view, ManualClock::new(today()), FormController::new(250)).unwrap();
    fill(&mut page, &valid_values());
    page.submit().unwrap();

    page.clock().advance(250);
    assert!(page.poll_timers().unwrap());
}

// =========================================================================
// Scripts
// =========================================================================

const ORDER_SCRIPT: &str = r#"
name: order and wait
steps:
  - action: click
    target: reveal-btn
  - action: fill_form
    values:
      name: Ada Lovelace
      email: ada@example.com
      phone: 555-123-4567
      order-details: A dozen lemon cupcakes
      date: "2026-10-19"
  - action: submit
    target: order-form
  - action: wait
    duration_ms: 5000
"#;

#[test]
fn script_parses_tagged_steps() {
    let script = EventScript::from_yaml_str(ORDER_SCRIPT).unwrap();
    assert_eq!(script.name, "order and wait");
    assert_eq!(script.steps.len(), 4);
    assert_eq!(script.steps[3], ScriptStep::Wait { duration_ms: 5000 });
    assert_eq!(script.steps[1].events().len(), 5);
}

#[test]
fn script_replay_submits_and_resets() {
    let mut page = default_page();
    let script = EventScript::from_yaml_str(ORDER_SCRIPT).unwrap();

    let log = run_script(&mut page, &script).unwrap();

    assert_eq!(log.events_dispatched, 7);
    assert_eq!(log.resets_fired, 1);
    assert!(matches!(
        log.outcomes.last(),
        Some(EventOutcome::Submitted(outcome)) if outcome.accepted
    ));
    assert!(visible(&page, ids::SECRET_MESSAGE));
    assert!(visible(&page, ids::ORDER_FORM));
}

#[test]
fn malformed_script_reports_script_error() {
    let result = EventScript::from_yaml_str("steps:\n  - action: dance\n");
    assert!(matches!(result, Err(PageError::Script { .. })));
}

// =========================================================================
// Layout and snapshots
// =========================================================================

#[test]
fn layout_loads_from_yaml() {
    let yaml = serde_yaml::to_string(&default_layout()).unwrap();
    let layout = PageLayout::from_yaml_str(&yaml).unwrap();
    let view = MemoryView::from_layout(&layout);
    assert!(PageBindings::resolve(&view).is_ok());
}

#[test]
fn snapshot_fingerprint_tracks_changes() {
    let mut page = default_page();
    let before = ViewSnapshot::capture(page.view());

    page.dispatch(&PageEvent::click(ids::CUPCAKE)).unwrap();
    let after = ViewSnapshot::capture(page.view());

    assert_ne!(before.fingerprint(), after.fingerprint());
    assert_eq!(after.element(ids::CUPCAKE).unwrap().text, "🧁✨");
}

// =========================================================================
// Trace
// =========================================================================

#[test]
fn trace_writes_one_line_per_event() {
    let path = std::env::temp_dir().join(format!("cupcake_trace_{}.jsonl", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let path_str = path.to_string_lossy().to_string();

    {
        let mut page = open_default_page(Some(&path_str)).unwrap();
        page.dispatch(&PageEvent::click(ids::REVEAL_BUTTON)).unwrap();
        page.dispatch(&PageEvent::blur(ids::NAME)).unwrap();
    }

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["event"], "click");
    assert_eq!(lines[0]["target"], "reveal-btn");
    assert_eq!(lines[1]["field_results"][0], "Name: Name is required");
    assert!(lines[1]["view_fingerprint"].is_string());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn unwritable_trace_is_disabled_and_page_keeps_running() {
    let dir = std::env::temp_dir();
    let logger = TraceLogger::new(&dir.to_string_lossy());
    assert!(!logger.is_enabled());

    let mut page = default_page().with_tracer(logger);
    let outcome = page.dispatch(&PageEvent::click(ids::REVEAL_BUTTON)).unwrap();
    assert_eq!(outcome, EventOutcome::MessageToggled { shown: true });
}
