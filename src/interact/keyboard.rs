use crate::view::bindings::PageBindings;
use crate::view::error::PageError;
use crate::view::view_model::View;

pub const KEYBOARD_PLACEHOLDER: &str = "Your text will appear here";

/// The four derived views of the typed text, or `None` when there is nothing to show.
pub fn transform_text(input: &str) -> Option<Vec<String>> {
    if input.trim().is_empty() {
        return None;
    }

    Some(vec![
        format!("Normal: {}", input),
        format!("Uppercase: {}", input.to_uppercase()),
        format!("Lowercase: {}", input.to_lowercase()),
        format!("Length: {} characters", input.encode_utf16().count()),
    ])
}

/// Store the typed value and redraw the output panel. Runs on every keystroke.
pub fn keyboard_input<V: View>(view: &mut V, page: &PageBindings, value: &str) -> Result<(), PageError> {
    view.set_value(&page.keyboard_input, value)?;

    let output = match transform_text(value) {
        Some(lines) => lines.join("\n"),
        None => KEYBOARD_PLACEHOLDER.to_string(),
    };
    view.set_text(&page.keyboard_output, &output)
}
