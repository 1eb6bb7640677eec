//! Single-wire LED strip driver
//!
//! Owns the frame buffer and streams it to a cascade of WS2812 panels.
//! A frame is sent as: guard delay, latch (line held low), settle delay,
//! then every panel in cascade order.

mod encoder;
mod layout;

use crate::LedWire;
use crate::color::{Grb, Rgb};
use crate::compositor::FrameBuffer;

pub use encoder::{
    BIT_PERIOD_NS, BIT_RATE_HZ, BITS_PER_PIXEL, CYCLE_NS, CYCLES_PER_BIT, MIN_RESET_US,
    PixelCode, PulseCode,
};
pub use layout::{LayoutError, PanelLayout, ScanOrder};

/// Delays around the latch pulse, in microseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripTimings {
    /// Wait before latching, lets the tail of the previous frame drain
    pub reset_guard_us: u32,
    /// Low hold that latches the chain, at least [`MIN_RESET_US`]
    pub reset_low_us: u32,
    /// Wait between the latch and the first pixel of a scan
    pub scan_settle_us: u32,
}

impl StripTimings {
    pub const DEFAULT: Self = Self {
        reset_guard_us: 500,
        reset_low_us: 80,
        scan_settle_us: 100,
    };
}

impl Default for StripTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Strip driver for a `WIDTH`×`HEIGHT` panel array
pub struct StripDriver<W: LedWire, const WIDTH: usize, const HEIGHT: usize> {
    wire: W,
    layout: PanelLayout,
    timings: StripTimings,
    frame: FrameBuffer<WIDTH, HEIGHT>,
}

impl<W: LedWire, const WIDTH: usize, const HEIGHT: usize> StripDriver<W, WIDTH, HEIGHT> {
    /// Create a driver with a blank frame buffer
    ///
    /// The buffer must split into whole panels on both axes.
    pub fn new(wire: W, layout: PanelLayout, timings: StripTimings) -> Result<Self, LayoutError> {
        if layout.panel_width == 0 || layout.panel_height == 0 {
            return Err(LayoutError::PanelSizeZero);
        }
        if !WIDTH.is_multiple_of(layout.panel_width) || !HEIGHT.is_multiple_of(layout.panel_height)
        {
            return Err(LayoutError::PanelMismatch);
        }
        let timings = StripTimings {
            reset_low_us: timings.reset_low_us.max(MIN_RESET_US),
            ..timings
        };
        Ok(Self {
            wire,
            layout,
            timings,
            frame: FrameBuffer::new(),
        })
    }

    pub fn frame(&self) -> &FrameBuffer<WIDTH, HEIGHT> {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer<WIDTH, HEIGHT> {
        &mut self.frame
    }

    pub fn wire(&self) -> &W {
        &self.wire
    }

    pub fn wire_mut(&mut self) -> &mut W {
        &mut self.wire
    }

    pub const fn layout(&self) -> PanelLayout {
        self.layout
    }

    pub const fn panels_x(&self) -> usize {
        WIDTH / self.layout.panel_width
    }

    pub const fn panels_y(&self) -> usize {
        HEIGHT / self.layout.panel_height
    }

    /// Latch the chain so the next pixel starts a new frame
    pub fn reset(&mut self) {
        self.wire.delay_us(self.timings.reset_guard_us);
        self.wire.hold_low(self.timings.reset_low_us);
    }

    /// Park the line at its idle level until the next reset
    pub fn hold_idle(&mut self) {
        self.wire.hold_idle();
    }

    /// Send one pixel straight to the wire, bypassing the frame buffer
    pub fn send_direct(&mut self, color: Grb) {
        self.push_blocking(PixelCode::new(color));
    }

    /// Send one RGB pixel straight to the wire
    pub fn send_direct_rgb(&mut self, color: Rgb) {
        self.send_direct(Grb::from_rgb(color));
    }

    /// Send one panel. Panels outside the array are ignored.
    pub fn scan_panel(&mut self, panel_x: usize, panel_y: usize, order: ScanOrder) {
        if panel_x >= self.panels_x() || panel_y >= self.panels_y() {
            return;
        }
        let origin = self.layout.panel_origin(panel_x, panel_y);
        let panel_width = self.layout.panel_width;

        for row in 0..self.layout.panel_height {
            let y = origin.y + row;
            let left_to_right = order.row_left_to_right(row);
            for column in 0..panel_width {
                let dx = if left_to_right {
                    column
                } else {
                    panel_width - 1 - column
                };
                let color = self.frame.pixel(origin.x + dx, y).unwrap_or(Grb::BLACK);
                self.push_blocking(PixelCode::new(color));
            }
        }
    }

    /// Send every panel in cascade order, top-left to bottom-right
    pub fn scan_buffer(&mut self, order: ScanOrder) {
        self.wire.delay_us(self.timings.scan_settle_us);
        for panel_y in 0..self.panels_y() {
            for panel_x in 0..self.panels_x() {
                self.scan_panel(panel_x, panel_y, order);
            }
        }
    }

    /// Latch and send the whole frame
    pub fn show(&mut self, order: ScanOrder) {
        self.reset();
        self.scan_buffer(order);
    }

    /// Outline one panel in the frame buffer
    pub fn draw_panel_border(&mut self, panel_x: usize, panel_y: usize, color: Grb) {
        if panel_x >= self.panels_x() || panel_y >= self.panels_y() {
            return;
        }
        let origin = self.layout.panel_origin(panel_x, panel_y);
        let right = origin.x + self.layout.panel_width - 1;
        let bottom = origin.y + self.layout.panel_height - 1;

        for x in origin.x..=right {
            self.frame.set_pixel(x, origin.y, color);
            self.frame.set_pixel(x, bottom, color);
        }
        for y in origin.y..=bottom {
            self.frame.set_pixel(origin.x, y, color);
            self.frame.set_pixel(right, y, color);
        }
    }

    /// Queue a pixel, spinning while the transmit queue is full
    fn push_blocking(&mut self, code: PixelCode) {
        while self.wire.try_push(code).is_err() {
            core::hint::spin_loop();
        }
    }
}
