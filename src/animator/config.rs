use embassy_time::Duration;

use crate::color::Grb;
use crate::compositor::Point;
use crate::strip::ScanOrder;

/// Run and idle timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadenceConfig {
    /// Period of the cadence timer
    pub tick_period: Duration,
    /// Ticks after which a run ends, passed to the tick counter on start
    pub ticks_per_run: u8,
    /// First tick count at which the character runs instead of walks.
    /// At or above `ticks_per_run` the whole run is spent walking.
    pub run_from_tick: u8,
    /// Idle time before hibernating
    pub idle_timeout: Duration,
    /// Button polling interval while idle
    pub idle_poll: Duration,
    /// Walk transition is `walk_wait / walk_transition_divisor`
    pub walk_transition_divisor: u32,
    /// Run transition is `run_wait / run_transition_divisor`
    pub run_transition_divisor: u32,
}

impl CadenceConfig {
    pub const DEFAULT: Self = Self {
        tick_period: Duration::from_secs(10),
        ticks_per_run: 6,
        run_from_tick: 5,
        idle_timeout: Duration::from_secs(30),
        idle_poll: Duration::from_millis(5),
        walk_transition_divisor: 4,
        run_transition_divisor: 6,
    };
}

/// Colors and placement of the rendered frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Color used for characters with color replacement enabled
    pub replace_color: Grb,
    /// Scale of the previous frame during the transition blend
    pub previous_scale: u8,
    /// Scale of the current frame during the transition blend
    pub blend_scale: u8,
    /// Where patterns are drawn in the frame buffer
    pub origin: Point,
}

impl RenderConfig {
    pub const DEFAULT: Self = Self {
        replace_color: Grb(0x07_00_00),
        previous_scale: 109,
        blend_scale: 219,
        origin: Point::ORIGIN,
    };
}

/// Configuration for the animator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimatorConfig {
    pub cadence: CadenceConfig,
    pub render: RenderConfig,
    pub scan: ScanOrder,
}

impl AnimatorConfig {
    pub const DEFAULT: Self = Self {
        cadence: CadenceConfig::DEFAULT,
        render: RenderConfig::DEFAULT,
        scan: ScanOrder::new(true, false),
    };
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
