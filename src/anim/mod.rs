//! Animation pacing: a small state machine deciding, for each permutation
//! step, whether to redraw and how long to wait first.
//!
//! Four modes, driven entirely by the configured delay and an explicit bulk
//! flag:
//!
//! - **normal** (delay > 0): sleep until the next wake instant, then redraw,
//!   after every step;
//! - **forced-redraw** (delay = 0, forced step): redraw immediately;
//! - **suppressed** (delay = 0, non-forced step): no redraw;
//! - **bulk** (set only around shuffle): redraw every Nth step, never sleep.
//!
//! Time comes from a [`Clock`] so tests can inject a fake one.

use std::time::{Duration, Instant};

/// Animation delay applied when a session starts.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

/// Increment applied by the speed keys.
pub const DELAY_STEP: Duration = Duration::from_millis(10);

/// In bulk mode, redraw once per this many steps.
pub const BULK_REDRAW_EVERY: u32 = 8;

/// A monotonic time source.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;
    /// Suspend until `deadline` (no-op if it already passed).
    fn sleep_until(&mut self, deadline: Instant);
}

/// The real monotonic clock, sleeping on the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep_until(&mut self, deadline: Instant) {
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
}

/// Paces redraws between permutation steps.
#[derive(Debug)]
pub struct Scheduler<C = SystemClock> {
    delay: Duration,
    bulk: bool,
    bulk_steps: u32,
    next_wake: Option<Instant>,
    clock: C,
}

impl Scheduler<SystemClock> {
    /// A scheduler on the real clock with the default delay.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Scheduler<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Scheduler<C> {
    /// A scheduler with the default delay on the given clock.
    pub const fn with_clock(clock: C) -> Self {
        Self {
            delay: DEFAULT_DELAY,
            bulk: false,
            bulk_steps: 0,
            next_wake: None,
            clock,
        }
    }

    /// The configured per-step delay.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether bulk (shuffle) pacing is active.
    pub const fn is_bulk(&self) -> bool {
        self.bulk
    }

    /// Borrow the clock (tests inspect fake clocks through this).
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Slow the animation down by one increment.
    pub fn slower(&mut self) {
        self.delay += DELAY_STEP;
    }

    /// Speed the animation up by one increment, flooring at zero.
    pub fn faster(&mut self) {
        self.delay = self.delay.saturating_sub(DELAY_STEP);
    }

    /// Enter or leave bulk pacing. Entering restarts the Nth-step counter.
    pub fn set_bulk(&mut self, on: bool) {
        self.bulk = on;
        self.bulk_steps = 0;
    }

    /// Restore the default delay and leave bulk mode.
    pub fn reset(&mut self) {
        self.delay = DEFAULT_DELAY;
        self.bulk = false;
        self.bulk_steps = 0;
        self.next_wake = None;
    }

    /// A permutation step completed; decide whether the frame is drawn.
    ///
    /// In normal mode this suspends the caller until the next wake instant
    /// before returning `true`.
    pub fn on_step(&mut self, forced: bool) -> bool {
        if self.bulk {
            self.bulk_steps += 1;
            return self.bulk_steps % BULK_REDRAW_EVERY == 0;
        }
        if self.delay.is_zero() {
            return forced;
        }
        let wake = self.clock.now() + self.delay;
        self.next_wake = Some(wake);
        self.clock.sleep_until(wake);
        true
    }
}
