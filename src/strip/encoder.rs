//! WS2812 bit encoding
//!
//! Each pixel is 24 bits sent most significant bit first in G, R, B order.
//! Every bit occupies one 1.25 µs period (800 kHz) split into a high and a
//! low pulse. The period is modelled as 10 cycles of an 8 MHz clock: a zero
//! is 3 cycles high and 7 low, a one is 7 high and 3 low. That puts every
//! pulse within ±150 ns of the datasheet values (T0H 400, T0L 850, T1H 800,
//! T1L 450).

use crate::color::Grb;

pub const BIT_RATE_HZ: u32 = 800_000;
pub const CYCLES_PER_BIT: u32 = 10;
pub const CYCLE_NS: u32 = 1_000_000_000 / (BIT_RATE_HZ * CYCLES_PER_BIT);
pub const BIT_PERIOD_NS: u32 = CYCLE_NS * CYCLES_PER_BIT;
pub const BITS_PER_PIXEL: usize = 24;

const ZERO_HIGH_CYCLES: u32 = 3;
const ONE_HIGH_CYCLES: u32 = 7;

/// Minimum low time that latches the chain
pub const MIN_RESET_US: u32 = 50;

/// One high/low pulse pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseCode {
    pub high_ns: u32,
    pub low_ns: u32,
}

impl PulseCode {
    pub const ZERO: Self = Self::from_cycles(ZERO_HIGH_CYCLES);
    pub const ONE: Self = Self::from_cycles(ONE_HIGH_CYCLES);

    const fn from_cycles(high: u32) -> Self {
        Self {
            high_ns: high * CYCLE_NS,
            low_ns: (CYCLES_PER_BIT - high) * CYCLE_NS,
        }
    }

    pub const fn for_bit(bit: bool) -> Self {
        if bit { Self::ONE } else { Self::ZERO }
    }

    /// Decode a pulse pair back into its bit
    pub const fn bit(self) -> bool {
        self.high_ns > self.low_ns
    }
}

/// SPI bit patterns, two data bits per byte at 3.2 MHz
const SPI_PATTERNS: [u8; 4] = [0b1000_1000, 0b1000_1110, 0b1110_1000, 0b1110_1110];

/// One pixel ready for the wire
///
/// Backends pick the representation their peripheral wants: raw bits for a
/// shift-register engine, pulse pairs for a pulse generator, or expanded
/// bytes for an SPI bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelCode {
    bits: u32,
}

impl PixelCode {
    pub const fn new(color: Grb) -> Self {
        Self { bits: color.bits() }
    }

    /// The 24 data bits, right aligned
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// The 24 data bits left aligned in a 32-bit word, for MSB-first shifters
    /// with 24-bit autopull
    pub const fn left_aligned(self) -> u32 {
        self.bits << 8
    }

    /// Pulse pairs in transmission order
    pub fn pulses(self) -> impl Iterator<Item = PulseCode> {
        (0..BITS_PER_PIXEL)
            .rev()
            .map(move |bit| PulseCode::for_bit((self.bits >> bit) & 1 == 1))
    }

    /// Expanded SPI bytes in transmission order
    #[allow(clippy::cast_possible_truncation)]
    pub const fn spi_bytes(self) -> [u8; 12] {
        let mut bytes = [0; 12];
        let mut i = 0;
        while i < 12 {
            let shift = 22 - 2 * i;
            bytes[i] = SPI_PATTERNS[((self.bits >> shift) & 0b11) as usize];
            i += 1;
        }
        bytes
    }
}

impl From<Grb> for PixelCode {
    fn from(color: Grb) -> Self {
        Self::new(color)
    }
}
