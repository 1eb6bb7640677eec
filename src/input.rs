//! Button debouncing
//!
//! Each input line owns its own [`Debouncer`]. A press is reported once,
//! after the raw level has been stable for the configured window, and not
//! again until a release has been observed.

use embassy_time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    /// How long a level must hold before it counts
    pub stable_for: Duration,
}

impl DebounceConfig {
    pub const DEFAULT: Self = Self {
        stable_for: Duration::from_millis(30),
    };
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Debounce state of one input line
#[derive(Debug, Clone)]
pub struct Debouncer {
    stable_for: Duration,
    last_reading: bool,
    last_change: Instant,
    debounced: bool,
    armed: bool,
}

impl Debouncer {
    /// Create a debouncer in the released state
    pub const fn new(config: &DebounceConfig) -> Self {
        Self {
            stable_for: config.stable_for,
            last_reading: false,
            last_change: Instant::from_ticks(0),
            debounced: false,
            armed: true,
        }
    }

    /// Feed one raw sample, `pressed` already adjusted for the line polarity
    ///
    /// Returns true exactly once per debounced press.
    pub fn update(&mut self, pressed: bool, now: Instant) -> bool {
        if pressed != self.last_reading {
            self.last_reading = pressed;
            self.last_change = now;
        }

        let stable = now
            .checked_duration_since(self.last_change)
            .is_some_and(|elapsed| elapsed >= self.stable_for);
        if !stable || self.debounced == pressed {
            return false;
        }

        self.debounced = pressed;
        if !pressed {
            self.armed = true;
            return false;
        }
        if self.armed {
            self.armed = false;
            return true;
        }
        false
    }

    /// Treat a line that is already held as pressed and reported
    ///
    /// The next edge is reported only after a debounced release. Used after
    /// a wake-up so the waking press is not delivered again.
    pub fn suppress_until_release(&mut self, pressed: bool, now: Instant) {
        if !pressed {
            return;
        }
        self.last_reading = true;
        self.last_change = now;
        self.debounced = true;
        self.armed = false;
    }

    /// Debounced level
    pub const fn is_pressed(&self) -> bool {
        self.debounced
    }
}

/// Raw levels of the two buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawButtons {
    pub start: bool,
    pub change: bool,
}

/// Debounced press edges for one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdges {
    /// Start an animation run
    pub start: bool,
    /// Switch to the next character
    pub change: bool,
}

impl ButtonEdges {
    pub const NONE: Self = Self {
        start: false,
        change: false,
    };
    pub const START: Self = Self {
        start: true,
        change: false,
    };
    pub const CHANGE: Self = Self {
        start: false,
        change: true,
    };

    pub const fn any(self) -> bool {
        self.start || self.change
    }
}

/// Debouncers for the start and change-character buttons
#[derive(Debug, Clone)]
pub struct Buttons {
    start: Debouncer,
    change: Debouncer,
}

impl Buttons {
    pub const fn new(config: &DebounceConfig) -> Self {
        Self {
            start: Debouncer::new(config),
            change: Debouncer::new(config),
        }
    }

    /// Swallow presses still held from before `now`, see
    /// [`Debouncer::suppress_until_release`]
    pub fn suppress_until_release(&mut self, raw: RawButtons, now: Instant) {
        self.start.suppress_until_release(raw.start, now);
        self.change.suppress_until_release(raw.change, now);
    }

    pub fn update(&mut self, raw: RawButtons, now: Instant) -> ButtonEdges {
        ButtonEdges {
            start: self.start.update(raw.start, now),
            change: self.change.update(raw.change, now),
        }
    }
}
