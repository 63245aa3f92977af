//! Deadline-based debouncing for auto-save.
//!
//! A [`Debouncer`] holds at most one pending value. Every [`schedule`]
//! replaces it and pushes the deadline out again; the host's event loop calls
//! [`poll`] on each tick and receives the value once the input has been quiet
//! for the configured delay. Time is passed in explicitly, so the debouncer
//! owns no timer thread and tests control the clock.
//!
//! [`schedule`]: Debouncer::schedule
//! [`poll`]: Debouncer::poll

use std::time::{Duration, Instant};

/// Quiet period after the last edit before content is auto-saved.
pub const AUTOSAVE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending value with `value`, due at `now + delay`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Takes the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.deadline().is_some_and(|deadline| now >= deadline) {
            self.flush()
        } else {
            None
        }
    }

    /// Takes the pending value regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Drops the pending value without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(AUTOSAVE_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_once_after_quiet_period() {
        let start = Instant::now();
        let mut d = Debouncer::new(ms(500));
        d.schedule("a", start);

        assert_eq!(d.poll(start + ms(499)), None);
        assert_eq!(d.poll(start + ms(500)), Some("a"));
        assert_eq!(d.poll(start + ms(2000)), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn test_rapid_updates_coalesce_to_last_value() {
        let start = Instant::now();
        let mut d = Debouncer::new(ms(500));
        let mut fired = Vec::new();

        for (i, value) in ["h", "he", "hel", "hell", "hello"].into_iter().enumerate() {
            let at = start + ms(100 * i as u64);
            if let Some(v) = d.poll(at) {
                fired.push(v);
            }
            d.schedule(value, at);
        }
        // Last edit at 400ms; nothing is due until 900ms.
        for t in (400..=1500).step_by(50) {
            if let Some(v) = d.poll(start + ms(t)) {
                fired.push(v);
            }
        }
        assert_eq!(fired, vec!["hello"]);
    }

    #[test]
    fn test_schedule_resets_deadline() {
        let start = Instant::now();
        let mut d = Debouncer::new(ms(500));
        d.schedule(1, start);
        d.schedule(2, start + ms(400));
        assert_eq!(d.deadline(), Some(start + ms(900)));
        assert_eq!(d.poll(start + ms(600)), None);
        assert_eq!(d.poll(start + ms(900)), Some(2));
    }

    #[test]
    fn test_cancel_and_flush() {
        let start = Instant::now();
        let mut d = Debouncer::new(ms(500));
        d.schedule(1, start);
        d.cancel();
        assert_eq!(d.poll(start + ms(1000)), None);

        d.schedule(2, start);
        assert_eq!(d.flush(), Some(2));
        assert!(d.deadline().is_none());
    }

    #[test]
    fn test_default_uses_autosave_delay() {
        let d: Debouncer<()> = Debouncer::default();
        assert_eq!(d.delay(), ms(500));
    }
}
