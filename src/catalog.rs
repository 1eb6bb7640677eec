//! Character profiles and the static catalog they live in
//!
//! Profiles are immutable, declarative values. The working copy that gets
//! color-corrected lives in [`crate::correction::CorrectedPatternSet`] and
//! never aliases the static tables.

use embassy_time::Duration;

use crate::pattern::{Pattern, PatternGroup};

/// Maximum number of gait groups a character may define
pub const MAX_PATTERN_GROUPS: usize = 4;

/// Output bounds for one color channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRange {
    pub min: u8,
    pub max: u8,
}

impl ChannelRange {
    /// `0..0` means "not configured" and is skipped by the pipeline
    pub const UNSET: Self = Self { min: 0, max: 0 };
    pub const FULL: Self = Self { min: 0, max: 255 };

    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub const fn is_unset(self) -> bool {
        self.min == 0 && self.max == 0
    }
}

impl Default for ChannelRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Color correction parameters of a character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionParams {
    pub green: ChannelRange,
    pub red: ChannelRange,
    pub blue: ChannelRange,
    /// Gamma exponent, values `<= 0` disable the correction
    pub gamma: f32,
    /// Brightness in percent (-100..100)
    pub brightness: i16,
    /// Contrast in percent (-100..100)
    pub contrast: i16,
}

impl CorrectionParams {
    /// Leaves patterns untouched
    pub const NONE: Self = Self {
        green: ChannelRange::UNSET,
        red: ChannelRange::UNSET,
        blue: ChannelRange::UNSET,
        gamma: 0.0,
        brightness: 0,
        contrast: 0,
    };
}

impl Default for CorrectionParams {
    fn default() -> Self {
        Self::NONE
    }
}

/// Everything needed to display one character
#[derive(Debug, Clone, Copy)]
pub struct CharacterProfile {
    pub name: &'static str,
    pub stop_pose: &'static Pattern,
    pub groups: &'static [PatternGroup],
    pub correction: CorrectionParams,
    /// Draw every lit pixel with the configured replace color
    pub color_replace: bool,
    /// Keep black pixels transparent on the full-brightness draw
    pub overlay: bool,
    /// Step interval while walking
    pub walk_wait: Duration,
    /// Step interval while running
    pub run_wait: Duration,
}

impl CharacterProfile {
    /// Create a profile with default timings and no correction.
    ///
    /// A character needs between one and [`MAX_PATTERN_GROUPS`] groups.
    pub const fn new(
        name: &'static str,
        stop_pose: &'static Pattern,
        groups: &'static [PatternGroup],
    ) -> Self {
        assert!(
            !groups.is_empty() && groups.len() <= MAX_PATTERN_GROUPS,
            "character needs 1..=4 pattern groups"
        );
        Self {
            name,
            stop_pose,
            groups,
            correction: CorrectionParams::NONE,
            color_replace: false,
            overlay: false,
            walk_wait: Duration::from_millis(120),
            run_wait: Duration::from_millis(30),
        }
    }

    #[must_use]
    pub const fn with_correction(self, correction: CorrectionParams) -> Self {
        Self { correction, ..self }
    }

    #[must_use]
    pub const fn with_color_replace(self, color_replace: bool) -> Self {
        Self {
            color_replace,
            ..self
        }
    }

    #[must_use]
    pub const fn with_overlay(self, overlay: bool) -> Self {
        Self { overlay, ..self }
    }

    #[must_use]
    pub const fn with_waits(self, walk_wait: Duration, run_wait: Duration) -> Self {
        Self {
            walk_wait,
            run_wait,
            ..self
        }
    }

    /// Total number of frames including the stop pose
    pub const fn pattern_count(&self) -> usize {
        let mut count = 1;
        let mut i = 0;
        while i < self.groups.len() {
            count += self.groups[i].frame_count();
            i += 1;
        }
        count
    }
}

/// Fixed, ordered list of characters cycled through by index
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    characters: &'static [CharacterProfile],
}

impl Catalog {
    pub const fn new(characters: &'static [CharacterProfile]) -> Self {
        assert!(!characters.is_empty(), "catalog must not be empty");
        Self { characters }
    }

    pub const fn len(&self) -> usize {
        self.characters.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static CharacterProfile> {
        self.characters.get(index)
    }

    /// Index of the character after `index`, wrapping to the first one
    pub const fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.characters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static CharacterProfile> {
        self.characters.iter()
    }
}
