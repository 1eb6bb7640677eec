//! Built-in characters
//!
//! Frames are drawn as ASCII art and turned into patterns at compile time by
//! [`sprite`]. Left-facing gaits are derived with [`mirrored_frames`].

mod sprites;

use embassy_time::Duration;

use crate::catalog::{Catalog, ChannelRange, CharacterProfile, CorrectionParams};
use crate::color::Grb;
use crate::pattern::{PATTERN_HEIGHT, PATTERN_PIXELS, PATTERN_WIDTH, Pattern, PatternGroup};

/// Pattern capacity that fits every built-in character
pub const MAX_CHARACTER_PATTERNS: usize = 16;

/// One frame of ASCII art, a row of bytes per pattern row
pub type Art = [&'static [u8; PATTERN_WIDTH]; PATTERN_HEIGHT];

/// Byte to color mapping used by [`sprite`]
pub type Palette = &'static [(u8, Grb)];

/// Build a pattern from ASCII art
///
/// Bytes missing from the palette, `.` included, become black.
pub const fn sprite(art: &Art, palette: Palette) -> Pattern {
    let mut pixels = [Grb::BLACK; PATTERN_PIXELS];
    let mut y = 0;
    while y < PATTERN_HEIGHT {
        let row = art[y];
        let mut x = 0;
        while x < PATTERN_WIDTH {
            pixels[y * PATTERN_WIDTH + x] = lookup(palette, row[x]);
            x += 1;
        }
        y += 1;
    }
    Pattern::from_pixels(pixels)
}

/// Build a frame sequence from ASCII art sharing one palette
pub const fn sprite_frames<const N: usize>(arts: &[Art; N], palette: Palette) -> [Pattern; N] {
    let mut frames = [Pattern::BLANK; N];
    let mut i = 0;
    while i < N {
        frames[i] = sprite(&arts[i], palette);
        i += 1;
    }
    frames
}

/// Horizontally flip every frame of a sequence
pub const fn mirrored_frames<const N: usize>(frames: &[Pattern; N]) -> [Pattern; N] {
    let mut flipped = [Pattern::BLANK; N];
    let mut i = 0;
    while i < N {
        flipped[i] = frames[i].mirrored();
        i += 1;
    }
    flipped
}

const fn lookup(palette: Palette, key: u8) -> Grb {
    let mut i = 0;
    while i < palette.len() {
        let (candidate, color) = palette[i];
        if candidate == key {
            return color;
        }
        i += 1;
    }
    Grb::BLACK
}

// Sprout: single-color walker, drawn with the replace color
static SPROUT_STOP: Pattern = sprite(&sprites::SPROUT_STOP, sprites::SPROUT_PALETTE);
static SPROUT_WALK: [Pattern; 4] = sprite_frames(&sprites::SPROUT_WALK, sprites::SPROUT_PALETTE);
static SPROUT_GROUPS: [PatternGroup; 1] = [PatternGroup::new("walk", &SPROUT_WALK)];

// Ember: walks right, then left
const EMBER_RIGHT: [Pattern; 2] = sprite_frames(&sprites::EMBER_RIGHT, sprites::EMBER_PALETTE);
static EMBER_STOP: Pattern = sprite(&sprites::EMBER_STOP, sprites::EMBER_PALETTE);
static EMBER_RIGHT_FRAMES: [Pattern; 2] = EMBER_RIGHT;
static EMBER_LEFT_FRAMES: [Pattern; 2] = mirrored_frames(&EMBER_RIGHT);
static EMBER_GROUPS: [PatternGroup; 2] = [
    PatternGroup::new("right", &EMBER_RIGHT_FRAMES),
    PatternGroup::new("left", &EMBER_LEFT_FRAMES),
];

// Drift
static DRIFT_STOP: Pattern = sprite(&sprites::DRIFT_STOP, sprites::DRIFT_PALETTE);
static DRIFT_FLOAT: [Pattern; 2] = sprite_frames(&sprites::DRIFT_FLOAT, sprites::DRIFT_PALETTE);
static DRIFT_GROUPS: [PatternGroup; 1] = [PatternGroup::new("float", &DRIFT_FLOAT)];

static CHARACTERS: [CharacterProfile; 3] = [
    CharacterProfile::new("sprout", &SPROUT_STOP, &SPROUT_GROUPS)
        .with_color_replace(true)
        .with_overlay(true)
        .with_waits(Duration::from_millis(120), Duration::from_millis(30)),
    CharacterProfile::new("ember", &EMBER_STOP, &EMBER_GROUPS)
        .with_correction(CorrectionParams {
            green: ChannelRange::new(0, 48),
            red: ChannelRange::new(0, 64),
            blue: ChannelRange::new(0, 32),
            gamma: 2.2,
            brightness: 0,
            contrast: 10,
        })
        .with_waits(Duration::from_millis(150), Duration::from_millis(40)),
    CharacterProfile::new("drift", &DRIFT_STOP, &DRIFT_GROUPS)
        .with_correction(CorrectionParams {
            green: ChannelRange::new(0, 40),
            red: ChannelRange::new(0, 40),
            blue: ChannelRange::new(8, 72),
            gamma: 1.8,
            brightness: -10,
            contrast: 20,
        })
        .with_overlay(true)
        .with_waits(Duration::from_millis(200), Duration::from_millis(60)),
];

/// The characters cycled through by the change button
pub static CATALOG: Catalog = Catalog::new(&CHARACTERS);
