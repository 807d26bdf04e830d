/// Default delay between a successful submission and the form reset.
pub const DEFAULT_RESET_DELAY_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReset {
    pub id: u64,
    pub due_ms: u64,
}

/// Single-slot, cancelable reset timer. Scheduling replaces any pending reset.
#[derive(Debug, Clone, Default)]
pub struct ResetTimer {
    pending: Option<PendingReset>,
    next_id: u64,
}

impl ResetTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) -> PendingReset {
        self.next_id += 1;
        let reset = PendingReset {
            id: self.next_id,
            due_ms: now_ms.saturating_add(delay_ms),
        };
        self.pending = Some(reset);
        reset
    }

    /// Drop the pending reset, if any. Returns what was cancelled.
    pub fn cancel(&mut self) -> Option<PendingReset> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<PendingReset> {
        self.pending
    }

    /// Take the pending reset if it is due at `now_ms`.
    pub fn take_due(&mut self, now_ms: u64) -> Option<PendingReset> {
        match self.pending {
            Some(reset) if reset.due_ms <= now_ms => self.pending.take(),
            _ => None,
        }
    }
}
