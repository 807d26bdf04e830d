#![allow(dead_code)]

use chrono::NaiveDate;
use cupcake_page::form::form_model::Field;
use cupcake_page::form::submit::FormController;
use cupcake_page::page::clock::ManualClock;
use cupcake_page::page::event::PageEvent;
use cupcake_page::page::page::Page;
use cupcake_page::view::layout::default_layout;
use cupcake_page::view::memory::MemoryView;
use cupcake_page::view::view_model::{ElementId, View};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

pub fn default_page() -> Page<MemoryView, ManualClock> {
    let view = MemoryView::from_layout(&default_layout());
    Page::new(view, ManualClock::new(today()), FormController::default()).unwrap()
}

pub fn id(raw: &str) -> ElementId {
    ElementId::new(raw)
}

pub fn valid_values() -> [(Field, &'static str); 5] {
    [
        (Field::Name, "Ada Lovelace"),
        (Field::Email, "ada@example.com"),
        (Field::Phone, "(555) 123-4567"),
        (Field::OrderDetails, "Two dozen vanilla cupcakes"),
        (Field::Date, "2026-10-20"),
    ]
}

/// Type every value into its input without validating.
pub fn fill(page: &mut Page<MemoryView, ManualClock>, values: &[(Field, &str)]) {
    for (field, value) in values {
        page.dispatch(&PageEvent::input(field.input_id(), value)).unwrap();
    }
}

pub fn error_text(page: &Page<MemoryView, ManualClock>, field: Field) -> String {
    page.view().text(&id(field.error_id())).unwrap()
}

pub fn error_visible(page: &Page<MemoryView, ManualClock>, field: Field) -> bool {
    page.view().is_visible(&id(field.error_id())).unwrap()
}

pub fn visible(page: &Page<MemoryView, ManualClock>, raw: &str) -> bool {
    page.view().is_visible(&id(raw)).unwrap()
}

pub fn text(page: &Page<MemoryView, ManualClock>, raw: &str) -> String {
    page.view().text(&id(raw)).unwrap()
}
