use chrono::NaiveDate;

use crate::form::form_model::{FormPhase, SubmitOutcome};
use crate::form::reset_timer::{DEFAULT_RESET_DELAY_MS, PendingReset, ResetTimer};
use crate::form::validator::validate_all;
use crate::view::bindings::FormBindings;
use crate::view::error::PageError;
use crate::view::view_model::{HIDDEN_CLASS, View};

/// Drives the order form: Editing -> Submitting -> (Success -> Editing) | Editing.
#[derive(Debug, Clone)]
pub struct FormController {
    reset_delay_ms: u64,
    timer: ResetTimer,
    success: bool,
}

impl FormController {
    pub fn new(reset_delay_ms: u64) -> Self {
        FormController {
            reset_delay_ms,
            timer: ResetTimer::new(),
            success: false,
        }
    }

    pub fn reset_delay_ms(&self) -> u64 {
        self.reset_delay_ms
    }

    pub fn phase(&self) -> FormPhase {
        if self.success {
            FormPhase::Success {
                reset_due_ms: self.timer.pending().map(|r| r.due_ms),
            }
        } else {
            FormPhase::Editing
        }
    }

    /// Handle a submission. Validates all fields; on success hides the form,
    /// shows the success message and schedules the reset.
    pub fn submit<V: View>(
        &mut self,
        view: &mut V,
        form: &FormBindings,
        today: NaiveDate,
        now_ms: u64,
    ) -> Result<SubmitOutcome, PageError> {
        let outcome = SubmitOutcome::from_results(validate_all(view, form, today)?);

        if outcome.accepted {
            view.set_class(&form.form, HIDDEN_CLASS, true)?;
            view.set_class(&form.success, HIDDEN_CLASS, false)?;
            self.timer.schedule(now_ms, self.reset_delay_ms);
            self.success = true;
        }

        Ok(outcome)
    }

    /// Fire the reset if it is due. Returns whether it fired.
    pub fn fire_due<V: View>(
        &mut self,
        view: &mut V,
        form: &FormBindings,
        now_ms: u64,
    ) -> Result<bool, PageError> {
        match self.timer.take_due(now_ms) {
            Some(_) => {
                self.apply_reset(view, form)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Cancel the pending reset. The success message stays up.
    pub fn cancel_reset(&mut self) -> Option<PendingReset> {
        self.timer.cancel()
    }

    pub fn pending_reset(&self) -> Option<PendingReset> {
        self.timer.pending()
    }

    /// Clear every input, show the form, hide the success message.
    pub fn apply_reset<V: View>(&mut self, view: &mut V, form: &FormBindings) -> Result<(), PageError> {
        for binding in &form.fields {
            view.set_value(&binding.input, "")?;
        }
        view.set_class(&form.form, HIDDEN_CLASS, false)?;
        view.set_class(&form.success, HIDDEN_CLASS, true)?;
        self.success = false;
        Ok(())
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_DELAY_MS)
    }
}
