//! Deferred one-shot callbacks.
//!
//! Замена fire-and-forget таймеров: каждый callback принадлежит владельцу,
//! тикает вместе с ним и отменяется при его teardown.
//!
//! A `DeferredCallbacks<T>` holds payloads scheduled `delay` after the moment
//! they were scheduled. `tick` returns the payloads that came due, in due-time
//! order, and drops them; each payload is therefore delivered at most once.
//! `cancel_all` drops everything still pending.

use std::time::Duration;

use bevy::prelude::*;

#[derive(Debug, Clone)]
struct Scheduled<T> {
    timer: Timer,
    payload: T,
}

/// Cancellable list of one-shot timers
#[derive(Debug, Clone)]
pub struct DeferredCallbacks<T> {
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for DeferredCallbacks<T> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<T> DeferredCallbacks<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to come due after `delay`.
    pub fn schedule(&mut self, delay: Duration, payload: T) {
        self.pending.push(Scheduled {
            timer: Timer::new(delay, TimerMode::Once),
            payload,
        });
    }

    /// Advance every pending timer; return the payloads that came due.
    ///
    /// Payloads due in the same tick are ordered by their delay.
    pub fn tick(&mut self, delta: Duration) -> Vec<T> {
        for scheduled in &mut self.pending {
            scheduled.timer.tick(delta);
        }

        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|s| s.timer.finished());
        self.pending = pending;

        due.sort_by_key(|s| s.timer.duration());
        due.into_iter().map(|s| s.payload).collect()
    }

    /// Drop every pending callback. Safe to call repeatedly.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Time left until the earliest pending callback.
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending.iter().map(|s| s.timer.remaining()).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Step {
        Half,
        Full,
    }

    #[test]
    fn test_callbacks_fire_once_in_order() {
        let mut callbacks = DeferredCallbacks::new();
        callbacks.schedule(Duration::from_secs(2), Step::Full);
        callbacks.schedule(Duration::from_secs(1), Step::Half);

        assert!(callbacks.tick(Duration::from_millis(500)).is_empty());
        assert_eq!(callbacks.tick(Duration::from_millis(500)), vec![Step::Half]);
        assert_eq!(callbacks.len(), 1);
        assert_eq!(callbacks.next_due_in(), Some(Duration::from_secs(1)));

        assert_eq!(callbacks.tick(Duration::from_secs(1)), vec![Step::Full]);
        assert!(callbacks.is_empty());

        // Ничего не повторяется
        assert!(callbacks.tick(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_large_tick_delivers_all_due_sorted() {
        let mut callbacks = DeferredCallbacks::new();
        callbacks.schedule(Duration::from_secs(2), Step::Full);
        callbacks.schedule(Duration::from_secs(1), Step::Half);

        assert_eq!(callbacks.tick(Duration::from_secs(5)), vec![Step::Half, Step::Full]);
    }

    #[test]
    fn test_cancel_all() {
        let mut callbacks = DeferredCallbacks::new();
        callbacks.schedule(Duration::from_secs(1), Step::Half);
        callbacks.schedule(Duration::from_secs(2), Step::Full);

        assert_eq!(callbacks.cancel_all(), 2);
        assert_eq!(callbacks.cancel_all(), 0);
        assert!(callbacks.tick(Duration::from_secs(5)).is_empty());
        assert_eq!(callbacks.next_due_in(), None);
    }
}
