//! One-shot cancelable task that dismisses validation messages.
//!
//! # Invariants
//! - At most one clear is pending; scheduling supersedes the previous one.
//! - A scheduled clear fires at most once.
//! - A deadline beyond the clock's range never fires.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScheduledClear {
    generation: u64,
    due_at: Option<Instant>,
}

#[derive(Debug, Default)]
pub struct ErrorClearTask {
    generation: u64,
    pending: Option<ScheduledClear>,
}

impl ErrorClearTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending clear and schedules a new one at `now + delay`.
    ///
    /// Returns the generation of the new schedule.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> u64 {
        self.generation += 1;
        self.pending = Some(ScheduledClear {
            generation: self.generation,
            due_at: now.checked_add(delay),
        });
        self.generation
    }

    /// Drops the pending clear. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn due_at(&self) -> Option<Instant> {
        self.pending.and_then(|scheduled| scheduled.due_at)
    }

    /// Generation of the pending clear, if any.
    pub fn pending_generation(&self) -> Option<u64> {
        self.pending.map(|scheduled| scheduled.generation)
    }

    /// Consumes the pending clear when its deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(ScheduledClear {
                due_at: Some(due_at),
                ..
            }) if now >= due_at => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
