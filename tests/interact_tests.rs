mod common;

use common::utils::{default_page, id, text, today, visible};
use cupcake_page::form::submit::FormController;
use cupcake_page::interact::faq::{
    CLOSED_MARKER, OPEN_CLASS, OPEN_MARKER, open_answers, open_items,
};
use cupcake_page::interact::keyboard::{KEYBOARD_PLACEHOLDER, transform_text};
use cupcake_page::interact::toggles::{
    CUPCAKE_DECORATED, CUPCAKE_PLAIN, DARK_MODE_LABEL, DARK_THEME_CLASS, GLOW_SHADOW,
    HIDE_LABEL, LIGHT_MODE_LABEL, NO_SHADOW, REVEAL_LABEL, STATUS_GLOWING, STATUS_READY,
    STATUS_SPRINKLES, TEXT_SHADOW_STYLE,
};
use cupcake_page::page::clock::ManualClock;
use cupcake_page::page::event::{EventOutcome, PageEvent};
use cupcake_page::page::page::Page;
use cupcake_page::view::layout::{default_layout, ids};
use cupcake_page::view::memory::MemoryView;
use cupcake_page::view::view_model::{Element, View};

// =========================================================================
// Reveal button
// =========================================================================

#[test]
fn reveal_toggle_is_reversible() {
    let mut page = default_page();
    let before = page.view().fingerprint();
    assert!(!visible(&page, ids::SECRET_MESSAGE));
    assert_eq!(text(&page, ids::REVEAL_BUTTON), REVEAL_LABEL);

    let outcome = page.dispatch(&PageEvent::click(ids::REVEAL_BUTTON)).unwrap();
    assert_eq!(outcome, EventOutcome::MessageToggled { shown: true });
    assert!(visible(&page, ids::SECRET_MESSAGE));
    assert_eq!(text(&page, ids::REVEAL_BUTTON), HIDE_LABEL);

    page.dispatch(&PageEvent::click(ids::REVEAL_BUTTON)).unwrap();
    assert!(!visible(&page, ids::SECRET_MESSAGE));
    assert_eq!(text(&page, ids::REVEAL_BUTTON), REVEAL_LABEL);
    assert_eq!(page.view().fingerprint(), before, "Two clicks restore the view");
}

// =========================================================================
// Cupcake hover and click
// =========================================================================

#[test]
fn pointer_leave_reverses_pointer_enter() {
    let mut page = default_page();
    let cupcake = id(ids::CUPCAKE);

    page.dispatch(&PageEvent::pointer_enter(ids::CUPCAKE)).unwrap();
    assert_eq!(
        page.view().style(&cupcake, TEXT_SHADOW_STYLE).unwrap().as_deref(),
        Some(GLOW_SHADOW)
    );
    assert_eq!(text(&page, ids::CUPCAKE_STATUS), STATUS_GLOWING);

    page.dispatch(&PageEvent::pointer_leave(ids::CUPCAKE)).unwrap();
    assert_eq!(
        page.view().style(&cupcake, TEXT_SHADOW_STYLE).unwrap().as_deref(),
        Some(NO_SHADOW)
    );
    assert_eq!(text(&page, ids::CUPCAKE_STATUS), STATUS_READY);
}

#[test]
fn cupcake_click_alternates_between_two_states() {
    let mut page = default_page();

    page.dispatch(&PageEvent::click(ids::CUPCAKE)).unwrap();
    assert_eq!(text(&page, ids::CUPCAKE), CUPCAKE_DECORATED);
    assert_eq!(text(&page, ids::CUPCAKE_STATUS), STATUS_SPRINKLES);

    page.dispatch(&PageEvent::click(ids::CUPCAKE)).unwrap();
    assert_eq!(text(&page, ids::CUPCAKE), CUPCAKE_PLAIN);

    page.dispatch(&PageEvent::click(ids::CUPCAKE)).unwrap();
    assert_eq!(text(&page, ids::CUPCAKE), CUPCAKE_DECORATED);
}

// =========================================================================
// Keyboard transformer
// =========================================================================

#[test]
fn transform_text_builds_four_views() {
    let lines = transform_text("Hello World").unwrap();
    assert_eq!(
        lines,
        vec![
            "Normal: Hello World",
            "Uppercase: HELLO WORLD",
            "Lowercase: hello world",
            "Length: 11 characters",
        ]
    );
}

#[test]
fn transform_text_counts_raw_length_and_skips_blank() {
    assert_eq!(transform_text(""), None);
    assert_eq!(transform_text("   "), None);
    let lines = transform_text(" ab ").unwrap();
    assert_eq!(lines[3], "Length: 4 characters", "Length includes padding");
}

#[test]
fn keyboard_output_recomputes_on_every_input() {
    let mut page = default_page();

    page.dispatch(&PageEvent::input(ids::KEYBOARD_INPUT, "a")).unwrap();
    assert!(text(&page, ids::KEYBOARD_OUTPUT).starts_with("Normal: a\n"));

    page.dispatch(&PageEvent::input(ids::KEYBOARD_INPUT, "ab")).unwrap();
    assert_eq!(
        text(&page, ids::KEYBOARD_OUTPUT),
        "Normal: ab\nUppercase: AB\nLowercase: ab\nLength: 2 characters"
    );

    page.dispatch(&PageEvent::input(ids::KEYBOARD_INPUT, "")).unwrap();
    assert_eq!(text(&page, ids::KEYBOARD_OUTPUT), KEYBOARD_PLACEHOLDER);
}

// =========================================================================
// Theme toggle
// =========================================================================

#[test]
fn theme_toggle_flips_root_class_and_label() {
    let mut page = default_page();
    let root = id(ids::ROOT);

    let outcome = page.dispatch(&PageEvent::click(ids::THEME_TOGGLE)).unwrap();
    assert_eq!(outcome, EventOutcome::ThemeToggled { dark: true });
    assert!(page.view().has_class(&root, DARK_THEME_CLASS).unwrap());
    assert_eq!(text(&page, ids::THEME_TOGGLE), LIGHT_MODE_LABEL);

    page.dispatch(&PageEvent::click(ids::THEME_TOGGLE)).unwrap();
    assert!(!page.view().has_class(&root, DARK_THEME_CLASS).unwrap());
    assert_eq!(text(&page, ids::THEME_TOGGLE), DARK_MODE_LABEL);
}

// =========================================================================
// FAQ accordion
// =========================================================================

#[test]
fn opening_second_question_closes_first() {
    let mut page = default_page();

    page.dispatch(&PageEvent::click("faq-q1")).unwrap();
    assert!(page.view().has_class(&id("faq-a1"), OPEN_CLASS).unwrap());
    assert!(text(&page, "faq-q1").starts_with(OPEN_MARKER));

    let outcome = page.dispatch(&PageEvent::click("faq-q2")).unwrap();
    assert_eq!(outcome, EventOutcome::FaqToggled { open: true });

    let open: Vec<String> = open_items(page.view(), page.bindings())
        .unwrap()
        .iter()
        .map(|item| item.answer.to_string())
        .collect();
    assert_eq!(open, vec!["faq-a2"]);
    assert!(text(&page, "faq-q1").starts_with(CLOSED_MARKER));
    assert!(text(&page, "faq-q2").starts_with(OPEN_MARKER));
}

#[test]
fn clicking_open_question_closes_everything() {
    let mut page = default_page();

    page.dispatch(&PageEvent::click("faq-q3")).unwrap();
    let outcome = page.dispatch(&PageEvent::click("faq-q3")).unwrap();

    assert_eq!(outcome, EventOutcome::FaqToggled { open: false });
    assert!(open_items(page.view(), page.bindings()).unwrap().is_empty());
    for q in ["faq-q1", "faq-q2", "faq-q3"] {
        assert!(text(&page, q).starts_with(CLOSED_MARKER), "{} closed", q);
    }
}

#[test]
fn at_most_one_answer_open_after_any_click_sequence() {
    let mut page = default_page();
    for q in ["faq-q1", "faq-q2", "faq-q2", "faq-q3", "faq-q1", "faq-q1", "faq-q3"] {
        page.dispatch(&PageEvent::click(q)).unwrap();
        assert!(open_items(page.view(), page.bindings()).unwrap().len() <= 1);
    }
}

#[test]
fn opening_a_question_closes_answers_without_a_question() {
    let mut view = MemoryView::from_layout(&default_layout());
    view.push(
        Element::new("faq-extra", "div")
            .with_class(ids::FAQ_ANSWER_CLASS)
            .with_class(OPEN_CLASS),
    );
    let mut page = Page::new(view, ManualClock::new(today()), FormController::default()).unwrap();
    assert_eq!(open_answers(page.view()).unwrap(), vec![id("faq-extra")]);

    page.dispatch(&PageEvent::click("faq-q1")).unwrap();

    assert!(!page.view().has_class(&id("faq-extra"), OPEN_CLASS).unwrap());
    assert_eq!(open_answers(page.view()).unwrap(), vec![id("faq-a1")]);
}

#[test]
fn unhandled_events_are_ignored() {
    let mut page = default_page();
    let before = page.view().fingerprint();

    let outcome = page.dispatch(&PageEvent::click(ids::CUPCAKE_STATUS)).unwrap();
    assert_eq!(outcome, EventOutcome::Ignored);
    let outcome = page.dispatch(&PageEvent::pointer_enter(ids::REVEAL_BUTTON)).unwrap();
    assert_eq!(outcome, EventOutcome::Ignored);

    assert_eq!(page.view().fingerprint(), before);
}
