use crate::form::form_model::{FormPhase, SubmitOutcome};
use crate::view::snapshot::ViewSnapshot;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a form submission outcome for terminal output.
///
/// Produces output like:
/// ```text
/// === Order form ===
///
/// ✓ VALID    Name
/// ✗ INVALID  Email — Please enter a valid email address
///
/// === Result: 4 valid, 1 invalid — form rejected ===
/// ```
pub fn format_submit_report(outcome: &SubmitOutcome) -> String {
    let mut out = String::from("=== Order form ===\n\n");

    for result in &outcome.results {
        match &result.message {
            None => out.push_str(&format!("\u{2713} VALID    {}\n", result.field.label())),
            Some(msg) => out.push_str(&format!(
                "\u{2717} INVALID  {} — {}\n",
                result.field.label(),
                msg
            )),
        }
    }

    let invalid = outcome.failed_fields().len();
    let valid = outcome.results.len() - invalid;
    let verdict = if outcome.accepted {
        "form accepted"
    } else {
        "form rejected"
    };

    out.push_str(&format!(
        "\n=== Result: {} valid, {} invalid — {} ===\n",
        valid, invalid, verdict
    ));

    out
}

/// Format a view snapshot, one element per line, hidden elements marked.
pub fn format_view_report(snapshot: &ViewSnapshot, phase: &FormPhase) -> String {
    let mut out = String::from("=== Page state ===\n\n");

    for el in &snapshot.elements {
        let marker = if el.is_visible() { " " } else { "~" };
        out.push_str(&format!("{} {:<16}", marker, el.id.as_str()));

        if !el.value.is_empty() {
            out.push_str(&format!(" value={:?}", el.value));
        }
        if !el.text.is_empty() {
            out.push_str(&format!(" text={:?}", el.text));
        }
        if !el.classes.is_empty() {
            out.push_str(&format!(" [{}]", el.classes.join(" ")));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "\n=== Form: {:?} | fingerprint {} ===\n",
        phase,
        snapshot.fingerprint()
    ));

    out
}
