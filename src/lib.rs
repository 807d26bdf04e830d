use crate::{
    form::submit::FormController,
    page::{clock::SystemClock, page::Page},
    trace::logger::TraceLogger,
    view::{error::PageError, layout::default_layout, memory::MemoryView},
};

pub mod cli;
pub mod form;
pub mod interact;
pub mod page;
pub mod report;
pub mod trace;
pub mod view;

/// Build the shipped bakery page on the wall clock, bound and ready for events.
pub fn open_default_page(trace_path: Option<&str>) -> Result<Page<MemoryView, SystemClock>, PageError> {
    let view = MemoryView::from_layout(&default_layout());
    let page = Page::new(view, SystemClock::new(), FormController::default())?;
    Ok(page.with_tracer(TraceLogger::from_path(trace_path)))
}
