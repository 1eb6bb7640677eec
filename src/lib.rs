#![no_std]

pub mod animator;
pub mod assets;
pub mod catalog;
pub mod color;
pub mod compositor;
pub mod correction;
pub mod input;
pub mod math8;
pub mod pattern;
pub mod runner;
pub mod strip;
pub mod timer;

pub use animator::{
    AnimationState, Animator, AnimatorConfig, AnimatorError, CadenceConfig, RenderConfig, Step,
};
pub use assets::{CATALOG, MAX_CHARACTER_PATTERNS};
pub use catalog::{Catalog, ChannelRange, CharacterProfile, CorrectionParams};
pub use compositor::{DrawMode, FrameBuffer, Point};
pub use correction::{CorrectedPatternSet, PatternError};
pub use input::{ButtonEdges, Buttons, DebounceConfig, RawButtons};
pub use pattern::{Pattern, PatternGroup};
pub use runner::Board;
pub use strip::{PanelLayout, PixelCode, ScanOrder, StripDriver, StripTimings};
pub use timer::{PeriodicTimer, TickCounter, TimerError};

pub use color::{Grb, Rgb};
pub use math8::scale8;
pub use embassy_time::{Duration, Instant};

/// The transmit queue has no room for another pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull;

/// Abstract single-wire LED output
///
/// Implement this trait to support different hardware platforms.
/// The strip driver is generic over this trait.
pub trait LedWire {
    /// Drive the line low for `micros`, latching the chain
    fn hold_low(&mut self, micros: u32);

    /// Park the line at its idle level
    fn hold_idle(&mut self);

    /// Busy-wait without touching the line
    fn delay_us(&mut self, micros: u32);

    /// Queue one encoded pixel, failing while the queue is full
    fn try_push(&mut self, pixel: PixelCode) -> Result<(), QueueFull>;
}
