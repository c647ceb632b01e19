use std::time::Duration;

use tracing::debug;

use crate::error::{Result, SnakeError};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Registration {
    /// Seconds between ticks
    interval: f64,
    /// Time of the next due tick, in seconds
    next_at: f64,
}

/// Fixed-interval tick timer. Holds at most one registration; a second
/// `start` while one is live is refused.
#[derive(Debug, Default)]
pub struct TickScheduler {
    registration: Option<Registration>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.registration.is_some()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.registration
            .map(|r| Duration::from_secs_f64(r.interval))
    }

    /// Register a tick every `interval`, the first one due at `now + interval`.
    pub fn start(&mut self, now: f64, interval: Duration) -> Result<()> {
        if self.registration.is_some() {
            return Err(SnakeError::TimerAlreadyActive);
        }
        self.register(now, interval);
        Ok(())
    }

    /// Cancel the registration. Returns false if there was nothing to cancel.
    pub fn stop(&mut self) -> bool {
        let was_active = self.registration.take().is_some();
        if was_active {
            debug!("Tick timer stopped");
        }
        was_active
    }

    /// Replace any live registration with a new one.
    pub fn reschedule(&mut self, now: f64, interval: Duration) {
        self.registration = None;
        self.register(now, interval);
    }

    /// Whether a tick is due at `now`. Fires at most once per call; if the
    /// caller fell more than a whole interval behind, the schedule restarts
    /// from `now` instead of replaying the missed ticks.
    pub fn poll(&mut self, now: f64) -> bool {
        let Some(reg) = self.registration.as_mut() else {
            return false;
        };
        if now < reg.next_at {
            return false;
        }

        reg.next_at += reg.interval;
        if reg.next_at <= now {
            reg.next_at = now + reg.interval;
        }
        true
    }

    fn register(&mut self, now: f64, interval: Duration) {
        let interval = interval.as_secs_f64();
        debug!(interval_ms = interval * 1000.0, "Tick timer started");
        self.registration = Some(Registration {
            interval,
            next_at: now + interval,
        });
    }
}
