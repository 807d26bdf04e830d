use crate::form::form_model::{Field, FormPhase, SubmitOutcome};
use crate::form::submit::FormController;
use crate::form::validator::validate_binding;
use crate::interact::faq::toggle_faq;
use crate::interact::keyboard::keyboard_input;
use crate::interact::toggles::{
    cupcake_click, cupcake_enter, cupcake_leave, toggle_reveal, toggle_theme,
};
use crate::page::clock::Clock;
use crate::page::event::{EventOutcome, PageEvent};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;
use crate::view::bindings::PageBindings;
use crate::view::error::PageError;
use crate::view::view_model::View;

/// A live page: the view, its bindings and the form state, driven one event at a time.
pub struct Page<V: View, C: Clock> {
    view: V,
    bindings: PageBindings,
    form: FormController,
    clock: C,
    tracer: TraceLogger,
    step: u64,
}

impl<V: View, C: Clock> Page<V, C> {
    /// Bind to `view`. Fails if any required element is missing.
    pub fn new(view: V, clock: C, form: FormController) -> Result<Self, PageError> {
        let bindings = PageBindings::resolve(&view)?;
        Ok(Page {
            view,
            bindings,
            form,
            clock,
            tracer: TraceLogger::disabled(),
            step: 0,
        })
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn bindings(&self) -> &PageBindings {
        &self.bindings
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn phase(&self) -> FormPhase {
        self.form.phase()
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Fire any overdue timer, run the handler for `event` to completion, then
    /// fire timers that came due while it ran.
    pub fn dispatch(&mut self, event: &PageEvent) -> Result<EventOutcome, PageError> {
        let target = event.target();
        if !self.view.contains(target) {
            return Err(PageError::missing(target.as_str(), "event target"));
        }

        // A timer whose deadline has passed runs before any later event
        self.poll_timers()?;

        let outcome = self.handle(event)?;

        self.step += 1;
        let mut trace = TraceEvent::now(self.step, event.name(), &self.form.phase())
            .with_target(target)
            .with_decision(format!("{:?}", outcome));
        match &outcome {
            EventOutcome::FieldValidated(result) => {
                trace = trace.with_field_results(std::slice::from_ref(result));
            }
            EventOutcome::Submitted(submit) => {
                trace = trace.with_field_results(&submit.results);
            }
            _ => {}
        }
        self.tracer.log(&trace.with_fingerprint(self.view.fingerprint()));

        self.poll_timers()?;
        Ok(outcome)
    }

    /// Fire the pending form reset if its deadline has passed.
    pub fn poll_timers(&mut self) -> Result<bool, PageError> {
        let fired = self
            .form
            .fire_due(&mut self.view, &self.bindings.form, self.clock.now_ms())?;

        if fired {
            self.step += 1;
            let trace = TraceEvent::now(self.step, "reset", &self.form.phase())
                .with_target(&self.bindings.form.form)
                .with_decision("form reset")
                .with_fingerprint(self.view.fingerprint());
            self.tracer.log(&trace);
        }

        Ok(fired)
    }

    /// Submit the order form directly, as a submit event on it would.
    pub fn submit(&mut self) -> Result<SubmitOutcome, PageError> {
        let form = self.bindings.form.form.clone();
        match self.dispatch(&PageEvent::Submit { target: form })? {
            EventOutcome::Submitted(outcome) => Ok(outcome),
            other => Err(PageError::missing(
                self.bindings.form.form.as_str(),
                format!("submit produced {:?}", other),
            )),
        }
    }

    pub fn cancel_reset(&mut self) -> bool {
        self.form.cancel_reset().is_some()
    }

    fn handle(&mut self, event: &PageEvent) -> Result<EventOutcome, PageError> {
        let view = &mut self.view;
        let page = &self.bindings;
        let today = self.clock.today();

        let outcome = match event {
            PageEvent::Click { target } => {
                if target == &page.reveal_button {
                    EventOutcome::MessageToggled {
                        shown: toggle_reveal(view, page)?,
                    }
                } else if target == &page.cupcake {
                    EventOutcome::CupcakeDecorated {
                        text: cupcake_click(view, page)?,
                    }
                } else if target == &page.theme_toggle {
                    EventOutcome::ThemeToggled {
                        dark: toggle_theme(view, page)?,
                    }
                } else if page.faq_item(target).is_some() {
                    EventOutcome::FaqToggled {
                        open: toggle_faq(view, page, target)?,
                    }
                } else {
                    EventOutcome::Ignored
                }
            }

            PageEvent::PointerEnter { target } if target == &page.cupcake => {
                cupcake_enter(view, page)?;
                EventOutcome::CupcakeGlowing
            }

            PageEvent::PointerLeave { target } if target == &page.cupcake => {
                cupcake_leave(view, page)?;
                EventOutcome::CupcakeResting
            }

            PageEvent::Input { target, value } => {
                if target == &page.keyboard_input {
                    keyboard_input(view, page, value)?;
                    EventOutcome::KeyboardUpdated
                } else {
                    view.set_value(target, value)?;
                    EventOutcome::ValueStored
                }
            }

            PageEvent::Blur { target } => match page.form.by_input(target) {
                Some(binding) if binding.field != Field::Date => {
                    EventOutcome::FieldValidated(validate_binding(view, binding, today)?)
                }
                _ => EventOutcome::Ignored,
            },

            PageEvent::Change { target, value } => {
                view.set_value(target, value)?;
                match page.form.by_input(target) {
                    Some(binding) if binding.field == Field::Date => {
                        EventOutcome::FieldValidated(validate_binding(view, binding, today)?)
                    }
                    _ => EventOutcome::ValueStored,
                }
            }

            PageEvent::Submit { target } if target == &page.form.form => {
                let now_ms = self.clock.now_ms();
                EventOutcome::Submitted(self.form.submit(view, &page.form, today, now_ms)?)
            }

            _ => EventOutcome::Ignored,
        };

        Ok(outcome)
    }
}

