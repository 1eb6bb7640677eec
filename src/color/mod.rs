mod packed;

use smart_leds::RGB8;

pub use packed::{Grb, Lut};

pub type Rgb = RGB8;
