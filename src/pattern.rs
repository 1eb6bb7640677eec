//! Immutable pattern frames and gait groups
//!
//! A [`Pattern`] is one 16×16 frame of packed colors. A [`PatternGroup`] is
//! the ordered frame sequence of one gait (walk, run, facing left...).

use crate::color::Grb;

pub const PATTERN_WIDTH: usize = 16;
pub const PATTERN_HEIGHT: usize = 16;
pub const PATTERN_PIXELS: usize = PATTERN_WIDTH * PATTERN_HEIGHT;

/// One 16×16 frame, stored row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pixels: [Grb; PATTERN_PIXELS],
}

impl Pattern {
    /// Fully transparent frame
    pub const BLANK: Self = Self::filled(Grb::BLACK);

    pub const fn from_pixels(pixels: [Grb; PATTERN_PIXELS]) -> Self {
        Self { pixels }
    }

    /// Build a frame from raw `0x00GGRRBB` words
    pub const fn from_words(words: &[u32; PATTERN_PIXELS]) -> Self {
        let mut pixels = [Grb::BLACK; PATTERN_PIXELS];
        let mut i = 0;
        while i < PATTERN_PIXELS {
            pixels[i] = Grb(words[i]);
            i += 1;
        }
        Self { pixels }
    }

    pub const fn filled(color: Grb) -> Self {
        Self {
            pixels: [color; PATTERN_PIXELS],
        }
    }

    pub const fn width(&self) -> usize {
        PATTERN_WIDTH
    }

    pub const fn height(&self) -> usize {
        PATTERN_HEIGHT
    }

    pub const fn pixels(&self) -> &[Grb; PATTERN_PIXELS] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Grb; PATTERN_PIXELS] {
        &mut self.pixels
    }

    /// Get a pixel, `None` outside the frame
    pub fn pixel(&self, x: usize, y: usize) -> Option<Grb> {
        if x >= PATTERN_WIDTH || y >= PATTERN_HEIGHT {
            return None;
        }
        Some(self.pixels[y * PATTERN_WIDTH + x])
    }

    /// Horizontally flipped copy, used to derive left-facing gaits
    #[must_use]
    pub const fn mirrored(&self) -> Self {
        let mut pixels = [Grb::BLACK; PATTERN_PIXELS];
        let mut y = 0;
        while y < PATTERN_HEIGHT {
            let mut x = 0;
            while x < PATTERN_WIDTH {
                pixels[y * PATTERN_WIDTH + x] =
                    self.pixels[y * PATTERN_WIDTH + (PATTERN_WIDTH - 1 - x)];
                x += 1;
            }
            y += 1;
        }
        Self { pixels }
    }
}

/// Ordered frames of one gait
#[derive(Debug, Clone, Copy)]
pub struct PatternGroup {
    name: &'static str,
    frames: &'static [Pattern],
}

impl PatternGroup {
    /// Create a group. Empty groups are rejected at compile time.
    pub const fn new(name: &'static str, frames: &'static [Pattern]) -> Self {
        assert!(!frames.is_empty(), "pattern group must have at least one frame");
        Self { name, frames }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn frames(&self) -> &'static [Pattern] {
        self.frames
    }

    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Option<&'static Pattern> {
        self.frames.get(index)
    }
}
