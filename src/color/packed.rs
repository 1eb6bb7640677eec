//! Packed 24-bit pixel colors
//!
//! Pattern assets and the frame buffer store colors as `0x00GGRRBB` words:
//! green in bits 16..24, red in bits 8..16, blue in bits 0..8. This is also
//! the order in which WS2812 LEDs expect the channels on the wire.

use super::Rgb;
use crate::math8::scale8;

/// Lookup table mapping every 8-bit channel value to a new one
pub type Lut = [u8; 256];

/// Packed `0x00GGRRBB` color
///
/// Black (`0x000000`) is the "no color" sentinel: overlay draws treat it as
/// transparent and range compression never lifts it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Grb(pub u32);

#[allow(clippy::cast_possible_truncation)]
impl Grb {
    pub const BLACK: Self = Self(0);

    /// Build a packed color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((g as u32) << 16) | ((r as u32) << 8) | b as u32)
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// The 24 data bits in wire order (G, R, B; most significant first)
    pub const fn bits(self) -> u32 {
        self.0 & 0x00FF_FFFF
    }

    /// Returns true for the transparent sentinel
    pub const fn is_black(self) -> bool {
        self.bits() == 0
    }

    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b)
    }

    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.red(),
            g: self.green(),
            b: self.blue(),
        }
    }

    /// Scale every channel by `scale` (255 = unchanged)
    #[must_use]
    pub const fn scale(self, scale: u8) -> Self {
        if scale == 255 {
            return self;
        }
        Self::new(
            scale8(self.red(), scale),
            scale8(self.green(), scale),
            scale8(self.blue(), scale),
        )
    }

    /// Map each channel through its own lookup table
    #[must_use]
    pub fn map(self, green: &Lut, red: &Lut, blue: &Lut) -> Self {
        Self::new(
            red[usize::from(self.red())],
            green[usize::from(self.green())],
            blue[usize::from(self.blue())],
        )
    }
}

impl From<Rgb> for Grb {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Grb> for Rgb {
    fn from(color: Grb) -> Self {
        color.to_rgb()
    }
}
