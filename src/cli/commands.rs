use chrono::{Local, NaiveDate};

use crate::form::form_model::{Field, FormSnapshot, SubmitOutcome};
use crate::form::submit::FormController;
use crate::interact::keyboard::{KEYBOARD_PLACEHOLDER, transform_text};
use crate::page::clock::ManualClock;
use crate::page::event::PageEvent;
use crate::page::page::Page;
use crate::page::script::{EventScript, run_script};
use crate::report::console::{format_submit_report, format_view_report};
use crate::trace::logger::TraceLogger;
use crate::view::error::PageError;
use crate::view::layout::{PageLayout, default_layout};
use crate::view::memory::MemoryView;
use crate::view::snapshot::ViewSnapshot;

// ============================================================================
// validate subcommand
// ============================================================================

/// Fill a fresh default page with `snapshot`, submit it, and report.
///
/// Returns the submit outcome; the caller decides the exit code.
pub fn cmd_validate(
    snapshot: &FormSnapshot,
    today: Option<NaiveDate>,
    tracer: TraceLogger,
    verbose: u8,
) -> Result<SubmitOutcome, PageError> {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let view = MemoryView::from_layout(&default_layout());
    let mut page = Page::new(view, ManualClock::new(today), FormController::default())?
        .with_tracer(tracer);

    if verbose > 0 {
        eprintln!("Validating order against {}...", today);
    }

    for field in Field::ALL {
        page.dispatch(&PageEvent::input(field.input_id(), snapshot.get(field)))?;
    }
    let outcome = page.submit()?;

    print!("{}", format_submit_report(&outcome));
    Ok(outcome)
}

// ============================================================================
// replay subcommand
// ============================================================================

pub struct ReplayOptions<'a> {
    pub script_path: &'a str,
    pub layout_path: Option<&'a str>,
    pub today: Option<NaiveDate>,
    pub format: &'a str,
    pub output: Option<&'a str>,
    pub reset_delay_ms: u64,
    pub verbose: u8,
}

pub fn cmd_replay(options: &ReplayOptions<'_>, tracer: TraceLogger) -> Result<(), PageError> {
    let script = EventScript::load(options.script_path)?;
    let layout = match options.layout_path {
        Some(path) => PageLayout::load(path)?,
        None => default_layout(),
    };
    let today = options.today.unwrap_or_else(|| Local::now().date_naive());

    let view = MemoryView::from_layout(&layout);
    let mut page = Page::new(
        view,
        ManualClock::new(today),
        FormController::new(options.reset_delay_ms),
    )?
    .with_tracer(tracer);

    if options.verbose > 0 {
        eprintln!(
            "Replaying {} ({} steps) on '{}'...",
            options.script_path,
            script.steps.len(),
            layout.title
        );
    }

    let log = run_script(&mut page, &script)?;

    if options.verbose > 0 {
        eprintln!(
            "  {} events dispatched, {} resets fired",
            log.events_dispatched, log.resets_fired
        );
    }

    let phase = page.phase();
    let snapshot = ViewSnapshot::capture(page.view());
    let content = match options.format {
        "json" => serde_json::to_string_pretty(&snapshot).map_err(|e| PageError::Json {
            context: "view snapshot".into(),
            source: e,
        })?,
        "yaml" => serde_yaml::to_string(&snapshot).map_err(|e| PageError::Yaml {
            context: "view snapshot".into(),
            source: e,
        })?,
        _ => format_view_report(&snapshot, &phase),
    };

    write_output(options.output, &content)
}

// ============================================================================
// transform / layout subcommands
// ============================================================================

pub fn cmd_transform(text: &str) -> String {
    match transform_text(text) {
        Some(lines) => lines.join("\n") + "\n",
        None => format!("{}\n", KEYBOARD_PLACEHOLDER),
    }
}

pub fn cmd_layout(format: &str) -> Result<String, PageError> {
    let layout = default_layout();
    match format {
        "json" => serde_json::to_string_pretty(&layout).map_err(|e| PageError::Json {
            context: "page layout".into(),
            source: e,
        }),
        _ => serde_yaml::to_string(&layout).map_err(|e| PageError::Yaml {
            context: "page layout".into(),
            source: e,
        }),
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn write_output(output: Option<&str>, content: &str) -> Result<(), PageError> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|e| PageError::Io {
            path: path.to_string(),
            source: e,
        }),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
