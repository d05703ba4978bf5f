//! Deferred callbacks
//!
//! Success callbacks may need to run after a delay (the password-reset
//! confirmation stays on screen before redirecting). Scheduling goes through
//! [`Timer`] so the delay can be driven manually in tests.

use std::time::Duration;

pub trait Timer {
    fn schedule(&self, delay: Duration, task: impl FnOnce() + 'static);
}

/// Timer backed by the browser's `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn schedule(&self, delay: Duration, task: impl FnOnce() + 'static) {
        leptos::prelude::set_timeout(task, delay);
    }
}

/// Run `task` now when `delay` is zero, otherwise through the timer
pub fn run_after<T: Timer>(timer: &T, delay: Duration, task: impl FnOnce() + 'static) {
    if delay.is_zero() {
        task();
    } else {
        timer.schedule(delay, task);
    }
}
