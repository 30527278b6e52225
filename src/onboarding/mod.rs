//! Splash screen timing.
//!
//! The host event loop polls the timer; it fires its ready callback once the
//! delay has elapsed, unless the screen was torn down first.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::app::SplashSettings;

pub const DEFAULT_READY_DELAY: Duration = Duration::from_millis(1_500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Pending,
    Fired,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct SplashTimer {
    started_at: Instant,
    delay: Duration,
    state: TimerState,
}

impl SplashTimer {
    pub fn start(delay: Duration) -> Self {
        Self::start_at(Instant::now(), delay)
    }

    pub fn start_at(started_at: Instant, delay: Duration) -> Self {
        Self {
            started_at,
            delay,
            state: TimerState::Pending,
        }
    }

    pub fn from_settings(settings: &SplashSettings) -> Self {
        Self::start(Duration::from_millis(settings.ready_delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Time left before the timer fires; zero once due.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.delay
            .saturating_sub(now.saturating_duration_since(self.started_at))
    }

    /// Runs `on_ready` if the delay has passed and the timer has neither fired
    /// nor been cancelled. Returns whether it ran.
    pub fn poll_at<F: FnOnce()>(&mut self, now: Instant, on_ready: F) -> bool {
        if self.state != TimerState::Pending || !self.remaining_at(now).is_zero() {
            return false;
        }
        self.state = TimerState::Fired;
        debug!(delay_ms = self.delay.as_millis() as u64, "splash ready");
        on_ready();
        true
    }

    pub fn poll<F: FnOnce()>(&mut self, on_ready: F) -> bool {
        self.poll_at(Instant::now(), on_ready)
    }

    /// Stops a pending timer from ever firing.
    pub fn cancel(&mut self) {
        if self.state == TimerState::Pending {
            self.state = TimerState::Cancelled;
        }
    }

    pub fn has_fired(&self) -> bool {
        self.state == TimerState::Fired
    }
}
