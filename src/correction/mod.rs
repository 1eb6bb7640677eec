//! Color correction pipeline
//!
//! Copies a character's patterns into an owned working set and applies
//! LUT-based corrections to it in place. Corrections are destructive and
//! cumulative: the only way back to the raw colors is reloading from the
//! static source.

mod lut;

use core::ops::Range;

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::catalog::{CharacterProfile, CorrectionParams, MAX_PATTERN_GROUPS};
use crate::color::Lut;
use crate::pattern::{PATTERN_HEIGHT, PATTERN_WIDTH, Pattern};

pub use lut::{brightness_contrast_lut, gamma_lut, identity_lut, range_lut};

/// Why the working set could not be built or corrected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// Source had no patterns
    EmptySource,
    /// Source does not fit into the working set capacity
    CapacityExceeded,
    /// Correction requested before a successful load
    NotLoaded,
}

impl core::fmt::Display for PatternError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptySource => f.write_str("pattern source is empty"),
            Self::CapacityExceeded => f.write_str("pattern source exceeds capacity"),
            Self::NotLoaded => f.write_str("pattern set is not loaded"),
        }
    }
}

/// Owned, corrected copy of one character's patterns
///
/// `N` is the maximum number of patterns (stop pose included) the set can
/// hold. Only one character is loaded at a time; loading another one
/// releases the previous copy first.
#[derive(Debug)]
pub struct CorrectedPatternSet<const N: usize> {
    patterns: Vec<Pattern, N>,
    groups: Vec<Range<usize>, MAX_PATTERN_GROUPS>,
    stop_pose: Option<usize>,
}

impl<const N: usize> CorrectedPatternSet<N> {
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
            groups: Vec::new(),
            stop_pose: None,
        }
    }

    /// Release the working copy
    pub fn reset(&mut self) {
        self.patterns.clear();
        self.groups.clear();
        self.stop_pose = None;
    }

    /// Copy a flat pattern array into the working set as a single group
    pub fn load(&mut self, source: &[Pattern]) -> Result<(), PatternError> {
        self.reset();
        if source.is_empty() {
            return Err(PatternError::EmptySource);
        }
        self.copy_group(source)
    }

    /// Copy a character's stop pose and groups, then apply its corrections
    pub fn load_profile(&mut self, profile: &CharacterProfile) -> Result<(), PatternError> {
        self.reset();
        if profile.pattern_count() > N {
            #[cfg(feature = "esp32-log")]
            println!(
                "[CorrectedPatternSet.load_profile] {} needs {} patterns, capacity {}",
                profile.name,
                profile.pattern_count(),
                N
            );
            return Err(PatternError::CapacityExceeded);
        }

        self.push(*profile.stop_pose)?;
        self.stop_pose = Some(0);
        for group in profile.groups {
            self.copy_group(group.frames())?;
        }

        self.apply(&profile.correction)
    }

    /// Apply all corrections in their fixed order: ranges, gamma,
    /// brightness/contrast
    pub fn apply(&mut self, params: &CorrectionParams) -> Result<(), PatternError> {
        self.set_green_range(params.green.min, params.green.max)?;
        self.set_red_range(params.red.min, params.red.max)?;
        self.set_blue_range(params.blue.min, params.blue.max)?;
        self.set_gamma(params.gamma)?;
        self.set_brightness_contrast(params.brightness, params.contrast)
    }

    /// Compress the green channel into `min..=max`. `0..0` is a no-op.
    pub fn set_green_range(&mut self, min: u8, max: u8) -> Result<(), PatternError> {
        self.ensure_loaded()?;
        if min == 0 && max == 0 {
            return Ok(());
        }
        let identity = identity_lut();
        self.map_pixels(&range_lut(min, max), &identity, &identity);
        Ok(())
    }

    /// Compress the red channel into `min..=max`. `0..0` is a no-op.
    pub fn set_red_range(&mut self, min: u8, max: u8) -> Result<(), PatternError> {
        self.ensure_loaded()?;
        if min == 0 && max == 0 {
            return Ok(());
        }
        let identity = identity_lut();
        self.map_pixels(&identity, &range_lut(min, max), &identity);
        Ok(())
    }

    /// Compress the blue channel into `min..=max`. `0..0` is a no-op.
    pub fn set_blue_range(&mut self, min: u8, max: u8) -> Result<(), PatternError> {
        self.ensure_loaded()?;
        if min == 0 && max == 0 {
            return Ok(());
        }
        let identity = identity_lut();
        self.map_pixels(&identity, &identity, &range_lut(min, max));
        Ok(())
    }

    /// Apply the same gamma curve to all channels. `gamma <= 0` is a no-op.
    pub fn set_gamma(&mut self, gamma: f32) -> Result<(), PatternError> {
        self.ensure_loaded()?;
        if gamma <= 0.0 {
            return Ok(());
        }
        let lut = gamma_lut(gamma);
        self.map_pixels(&lut, &lut, &lut);
        Ok(())
    }

    /// Apply contrast, then brightness. Skipped when both are zero.
    pub fn set_brightness_contrast(
        &mut self,
        brightness: i16,
        contrast: i16,
    ) -> Result<(), PatternError> {
        self.ensure_loaded()?;
        if brightness == 0 && contrast == 0 {
            return Ok(());
        }
        let lut = brightness_contrast_lut(brightness, contrast);
        self.map_pixels(&lut, &lut, &lut);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        !self.patterns.is_empty()
    }

    /// Number of patterns held, stop pose included
    pub fn count(&self) -> usize {
        self.patterns.len()
    }

    pub const fn width(&self) -> usize {
        PATTERN_WIDTH
    }

    pub const fn height(&self) -> usize {
        PATTERN_HEIGHT
    }

    /// Pattern by flat index, `None` when out of range or not loaded
    pub fn pattern(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    pub fn stop_pose(&self) -> Option<&Pattern> {
        self.stop_pose.and_then(|index| self.patterns.get(index))
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn frame_count(&self, group: usize) -> Option<usize> {
        self.groups.get(group).map(ExactSizeIterator::len)
    }

    /// Frame `index` of `group`, `None` when either is out of range
    pub fn frame(&self, group: usize, index: usize) -> Option<&Pattern> {
        let range = self.groups.get(group)?;
        if index >= range.len() {
            return None;
        }
        self.patterns.get(range.start + index)
    }

    fn copy_group(&mut self, frames: &[Pattern]) -> Result<(), PatternError> {
        let start = self.patterns.len();
        for frame in frames {
            self.push(*frame)?;
        }
        let range = start..self.patterns.len();
        if self.groups.push(range).is_err() {
            self.reset();
            return Err(PatternError::CapacityExceeded);
        }
        Ok(())
    }

    fn push(&mut self, pattern: Pattern) -> Result<(), PatternError> {
        if self.patterns.push(pattern).is_err() {
            self.reset();
            return Err(PatternError::CapacityExceeded);
        }
        Ok(())
    }

    fn ensure_loaded(&self) -> Result<(), PatternError> {
        if self.is_loaded() {
            Ok(())
        } else {
            Err(PatternError::NotLoaded)
        }
    }

    fn map_pixels(&mut self, green: &Lut, red: &Lut, blue: &Lut) {
        for pattern in self.patterns.iter_mut() {
            for pixel in pattern.pixels_mut() {
                *pixel = pixel.map(green, red, blue);
            }
        }
    }
}

impl<const N: usize> Default for CorrectedPatternSet<N> {
    fn default() -> Self {
        Self::new()
    }
}
