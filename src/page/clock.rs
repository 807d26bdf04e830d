use std::cell::Cell;
use std::time::Instant;

use chrono::{Local, NaiveDate};

use crate::form::rules::DATE_FORMAT;
use crate::view::error::PageError;

/// Source of "today" for date validation and of monotonic time for timers.
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Milliseconds since the page started.
    fn now_ms(&self) -> u64;
}

/// Wall clock: local calendar date, real elapsed time.
#[derive(Debug, Clone)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Fixed date and hand-advanced time, for replays and tests.
#[derive(Debug, Clone)]
pub struct ManualClock {
    today: Cell<NaiveDate>,
    now_ms: Cell<u64>,
}

impl ManualClock {
    pub fn new(today: NaiveDate) -> Self {
        ManualClock {
            today: Cell::new(today),
            now_ms: Cell::new(0),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get().saturating_add(ms));
    }

    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }

    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, PageError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| PageError::InvalidDate(raw.to_string()))
}
