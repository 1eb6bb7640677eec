//! Periodic cadence timer
//!
//! The hardware timer fires every tick period in interrupt context and only
//! calls [`TickCounter::on_period`]. The main loop reads the count and takes
//! the boundary/expiry flags. The shared state is guarded by a critical
//! section, so it is safe on cores without atomic read-modify-write.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::Duration;

/// The timer could not be armed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerError;

impl core::fmt::Display for TimerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("failed to arm periodic timer")
    }
}

/// Repeating hardware timer
///
/// Implementations call [`TickCounter::on_period`] from the timer interrupt
/// and cancel themselves once it returns `false`.
pub trait PeriodicTimer {
    /// Start firing every `period`
    fn arm(&mut self, period: Duration) -> Result<(), TimerError>;

    /// Stop firing. Must be safe to call when not armed.
    fn disarm(&mut self);
}

#[derive(Debug, Clone, Copy, Default)]
struct TickState {
    limit: u8,
    count: u8,
    boundary: bool,
    expired: bool,
    running: bool,
}

/// Tick state shared between the timer interrupt and the main loop
///
/// Each run counts up to the limit it was started with. The tick that
/// reaches the limit resets the count, flags the run as expired and stops
/// counting.
pub struct TickCounter {
    inner: Mutex<Cell<TickState>>,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(TickState {
                limit: 0,
                count: 0,
                boundary: false,
                expired: false,
                running: false,
            })),
        }
    }

    /// Ticks per run of the current or last run
    pub fn limit(&self) -> u8 {
        self.read().limit
    }

    /// Begin a run of `limit` ticks with a zero count and cleared flags
    ///
    /// A limit of zero is treated as one.
    pub fn start(&self, limit: u8) {
        self.replace(TickState {
            limit: limit.max(1),
            running: true,
            ..TickState::default()
        });
    }

    /// End the run, stray ticks after this are ignored
    pub fn stop(&self) {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            cell.set(TickState {
                limit: cell.get().limit,
                ..TickState::default()
            });
        });
    }

    /// Record one timer period
    ///
    /// Returns `false` when the timer should cancel itself: either this tick
    /// completed the run or no run is active.
    pub fn on_period(&self) -> bool {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut state = cell.get();
            if !state.running {
                return false;
            }

            state.count = state.count.saturating_add(1);
            state.boundary = true;
            let keep_running = state.count < state.limit;
            if !keep_running {
                state.count = 0;
                state.expired = true;
                state.running = false;
            }

            cell.set(state);
            keep_running
        })
    }

    /// Ticks seen in the current run
    pub fn count(&self) -> u8 {
        self.read().count
    }

    pub fn is_running(&self) -> bool {
        self.read().running
    }

    /// Returns true once per tick since the last call
    pub fn take_boundary(&self) -> bool {
        self.take(|state| core::mem::take(&mut state.boundary))
    }

    /// Returns true once after the run completed
    pub fn take_expired(&self) -> bool {
        self.take(|state| core::mem::take(&mut state.expired))
    }

    fn read(&self) -> TickState {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    fn replace(&self, state: TickState) {
        critical_section::with(|cs| self.inner.borrow(cs).set(state));
    }

    fn take(&self, f: impl FnOnce(&mut TickState) -> bool) -> bool {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut state = cell.get();
            let value = f(&mut state);
            cell.set(state);
            value
        })
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}
