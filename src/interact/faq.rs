use crate::view::bindings::{FaqItem, PageBindings};
use crate::view::error::PageError;
use crate::view::layout::ids;
use crate::view::view_model::{ElementId, View};

pub const OPEN_CLASS: &str = "show";
pub const CLOSED_MARKER: &str = "➕";
pub const OPEN_MARKER: &str = "➖";

/// Accordion click: close everything, then reopen the clicked answer unless it was
/// already open. Returns whether the clicked answer ends up open.
pub fn toggle_faq<V: View>(view: &mut V, page: &PageBindings, question: &ElementId) -> Result<bool, PageError> {
    let item = page
        .faq_item(question)
        .ok_or_else(|| PageError::missing(question.as_str(), "not a bound FAQ question"))?;
    let was_open = view.has_class(&item.answer, OPEN_CLASS)?;

    // Every answer on the page, paired with a question or not
    for answer in view.query_class(ids::FAQ_ANSWER_CLASS) {
        view.set_class(&answer, OPEN_CLASS, false)?;
    }
    for other in &page.faq {
        swap_marker(view, &other.question, OPEN_MARKER, CLOSED_MARKER)?;
    }

    if !was_open {
        view.set_class(&item.answer, OPEN_CLASS, true)?;
        swap_marker(view, &item.question, CLOSED_MARKER, OPEN_MARKER)?;
    }

    Ok(!was_open)
}

/// FAQ entries whose answer is currently open.
pub fn open_items<'a, V: View>(view: &V, page: &'a PageBindings) -> Result<Vec<&'a FaqItem>, PageError> {
    let mut open = Vec::new();
    for item in &page.faq {
        if view.has_class(&item.answer, OPEN_CLASS)? {
            open.push(item);
        }
    }
    Ok(open)
}

/// Ids of every `.faq-answer` currently open, in document order.
pub fn open_answers<V: View>(view: &V) -> Result<Vec<ElementId>, PageError> {
    let mut open = Vec::new();
    for answer in view.query_class(ids::FAQ_ANSWER_CLASS) {
        if view.has_class(&answer, OPEN_CLASS)? {
            open.push(answer);
        }
    }
    Ok(open)
}

fn swap_marker<V: View>(view: &mut V, id: &ElementId, from: &str, to: &str) -> Result<(), PageError> {
    let text = view.text(id)?;
    if text.contains(from) {
        view.set_text(id, &text.replacen(from, to, 1))?;
    }
    Ok(())
}
