//! Hotkey-driven body list reload
//!
//! The reload key is polled every frame while held, so requests are
//! debounced: at most one reload per `RELOAD_DEBOUNCE` window.

use std::time::{Duration, Instant};

pub const RELOAD_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct ReloadController {
    debounce: Duration,
    last_attempt: Option<Instant>,
}

impl Default for ReloadController {
    fn default() -> Self {
        Self::new(RELOAD_DEBOUNCE)
    }
}

impl ReloadController {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            last_attempt: None,
        }
    }

    /// Called once per frame with the current key state. Returns true when a
    /// reload should run now, in which case `now` becomes the last attempt.
    pub fn poll(&mut self, key_down: bool, now: Instant) -> bool {
        if !key_down {
            return false;
        }

        let ready = match self.last_attempt {
            Some(last) => now.saturating_duration_since(last) >= self.debounce,
            None => true,
        };
        if ready {
            self.last_attempt = Some(now);
        }
        ready
    }

    pub fn last_attempt(&self) -> Option<Instant> {
        self.last_attempt
    }
}
