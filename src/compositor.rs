//! Frame buffer and pattern compositing
//!
//! The frame buffer mirrors the physical panel array. Patterns are drawn into
//! it at an origin under one of four replace/overlay rules:
//!
//! | replace color | overlay | black source   | lit source     |
//! |---------------|---------|----------------|----------------|
//! | set           | false   | clear to black | replace color  |
//! | set           | true    | unchanged      | replace color  |
//! | unset         | false   | clear to black | source color   |
//! | unset         | true    | unchanged      | source color   |

use crate::color::Grb;
use crate::pattern::Pattern;

/// Top-left corner of a draw in frame buffer coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// How source pixels are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawMode {
    /// Color forced onto every lit pixel, black disables replacement
    pub replace_color: Grb,
    /// Treat black source pixels as transparent
    pub overlay: bool,
    /// Scale applied to the written color (255 = unchanged)
    pub scale: u8,
}

impl DrawMode {
    /// Plain copy of the source, black clears
    pub const OPAQUE: Self = Self {
        replace_color: Grb::BLACK,
        overlay: false,
        scale: 255,
    };

    /// Plain copy of the source, black is transparent
    pub const OVERLAY: Self = Self {
        overlay: true,
        ..Self::OPAQUE
    };

    #[must_use]
    pub const fn with_replace(self, color: Grb) -> Self {
        Self {
            replace_color: color,
            ..self
        }
    }

    #[must_use]
    pub const fn with_overlay(self, overlay: bool) -> Self {
        Self { overlay, ..self }
    }

    #[must_use]
    pub const fn with_scale(self, scale: u8) -> Self {
        Self { scale, ..self }
    }

    /// Color to write for a source pixel, `None` to leave the destination
    #[inline]
    pub const fn resolve(self, source: Grb) -> Option<Grb> {
        let color = if source.is_black() {
            if self.overlay {
                return None;
            }
            Grb::BLACK
        } else if self.replace_color.is_black() {
            source
        } else {
            self.replace_color
        };
        Some(color.scale(self.scale))
    }
}

impl Default for DrawMode {
    fn default() -> Self {
        Self::OPAQUE
    }
}

/// Pixel grid covering the whole panel array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const WIDTH: usize, const HEIGHT: usize> {
    rows: [[Grb; WIDTH]; HEIGHT],
}

impl<const WIDTH: usize, const HEIGHT: usize> FrameBuffer<WIDTH, HEIGHT> {
    pub const fn new() -> Self {
        Self {
            rows: [[Grb::BLACK; WIDTH]; HEIGHT],
        }
    }

    pub const fn width(&self) -> usize {
        WIDTH
    }

    pub const fn height(&self) -> usize {
        HEIGHT
    }

    /// Fill the whole grid with one color
    pub fn clear(&mut self, color: Grb) {
        for row in &mut self.rows {
            row.fill(color);
        }
    }

    /// Set one pixel, ignoring coordinates outside the grid
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Grb) {
        if let Some(pixel) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *pixel = color;
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Grb> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn row(&self, y: usize) -> Option<&[Grb; WIDTH]> {
        self.rows.get(y)
    }

    /// Draw a pattern with its top-left corner at `origin`
    pub fn draw_pattern(&mut self, pattern: &Pattern, origin: Point, mode: DrawMode) {
        self.draw_buffer(pattern.pixels(), pattern.width(), origin, mode);
    }

    /// Draw a row-major pixel buffer `width` pixels wide
    ///
    /// Pixels landing outside the grid are dropped.
    pub fn draw_buffer(&mut self, pixels: &[Grb], width: usize, origin: Point, mode: DrawMode) {
        if width == 0 {
            return;
        }
        for (py, row) in pixels.chunks(width).enumerate() {
            for (px, &source) in row.iter().enumerate() {
                if let Some(color) = mode.resolve(source) {
                    self.set_pixel(
                        origin.x.saturating_add(px),
                        origin.y.saturating_add(py),
                        color,
                    );
                }
            }
        }
    }
}

impl<const WIDTH: usize, const HEIGHT: usize> Default for FrameBuffer<WIDTH, HEIGHT> {
    fn default() -> Self {
        Self::new()
    }
}
