//! Lookup table builders
//!
//! Every correction is precomputed into a 256-entry table once and then
//! applied per channel, so the cost per pixel is three table reads.

use libm::{powf, roundf};

use crate::color::Lut;

/// Table that leaves every value untouched
pub const fn identity_lut() -> Lut {
    let mut lut = [0; 256];
    let mut i = 0;
    while i < 256 {
        #[allow(clippy::cast_possible_truncation)]
        {
            lut[i] = i as u8;
        }
        i += 1;
    }
    lut
}

/// Compress a channel into `min..=max`
///
/// Zero stays zero so black keeps meaning "transparent". Other values map to
/// `min + round((max - min) * v / 255)`.
pub fn range_lut(min: u8, max: u8) -> Lut {
    let span = f32::from(max) - f32::from(min);
    let mut lut = [0; 256];
    for value in 1..=255u8 {
        let mapped = f32::from(min) + roundf(span * f32::from(value) / 255.0);
        lut[usize::from(value)] = clip(mapped);
    }
    lut
}

/// Gamma curve `255 * (v / 255) ^ gamma`
///
/// Non-positive gamma falls back to 1.0.
pub fn gamma_lut(gamma: f32) -> Lut {
    let gamma = if gamma > 0.0 { gamma } else { 1.0 };
    let mut lut = [0; 256];
    for value in 0..=255u8 {
        let normalized = f32::from(value) / 255.0;
        lut[usize::from(value)] = clip(roundf(255.0 * powf(normalized, gamma)));
    }
    lut
}

/// Contrast around mid-gray followed by a brightness offset
///
/// Both percentages are clamped to -100..100. Other values map to
/// `round((v - 128) * (1 + contrast / 100) + 128) + round(255 * brightness / 100)`.
/// Zero is not run through the curve and stays zero, as with the range
/// table, so black remains transparent after any correction.
pub fn brightness_contrast_lut(brightness: i16, contrast: i16) -> Lut {
    let brightness = brightness.clamp(-100, 100);
    let contrast = contrast.clamp(-100, 100);

    let gain = 1.0 + f32::from(contrast) / 100.0;
    let offset = roundf(255.0 * f32::from(brightness) / 100.0);

    let mut lut = [0; 256];
    for value in 1..=255u8 {
        let stretched = (f32::from(value) - 128.0) * gain + 128.0;
        lut[usize::from(value)] = clip(roundf(stretched) + offset);
    }
    lut
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clip(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
