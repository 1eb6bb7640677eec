//! Sprite art for the built-in characters
//!
//! `.` is always transparent. Every other byte is looked up in the
//! character's palette.

use super::{Art, Palette};
use crate::color::Grb;

pub(super) const SPROUT_PALETTE: Palette = &[
    (b'#', Grb::new(0, 200, 0)),
    (b'o', Grb::new(0, 90, 0)),
];

pub(super) const SPROUT_STOP: Art = [
    b"................",
    b"......####......",
    b".....######.....",
    b".....#o##o#.....",
    b".....######.....",
    b"......####......",
    b".......##.......",
    b"....########....",
    b"...#.######.#...",
    b"...#.######.#...",
    b".....######.....",
    b"......####......",
    b"......#..#......",
    b"......#..#......",
    b".....##..##.....",
    b"................",
];

pub(super) const SPROUT_WALK: [Art; 4] = [
    [
        b"................",
        b"......####......",
        b".....######.....",
        b".....#o##o#.....",
        b".....######.....",
        b"......####......",
        b".......##.......",
        b".....#######....",
        b"....#######.#...",
        b"...#.######..#..",
        b".....######.....",
        b"......####......",
        b".....#....#.....",
        b"....#......#....",
        b"...##......##...",
        b"................",
    ],
    [
        b"................",
        b"......####......",
        b".....######.....",
        b".....#o##o#.....",
        b".....######.....",
        b"......####......",
        b".......##.......",
        b".....######.....",
        b"....#######.....",
        b"....#######.....",
        b".....######.....",
        b"......####......",
        b"......#..#......",
        b"......#.#.......",
        b".....##.##......",
        b"................",
    ],
    [
        b"................",
        b"......####......",
        b".....######.....",
        b".....#o##o#.....",
        b".....######.....",
        b"......####......",
        b".......##.......",
        b"....#######.....",
        b"...#.#######....",
        b"..#..######.#...",
        b".....######.....",
        b"......####......",
        b".....#....#.....",
        b"....#......#....",
        b"...##......##...",
        b"................",
    ],
    [
        b"................",
        b"......####......",
        b".....######.....",
        b".....#o##o#.....",
        b".....######.....",
        b"......####......",
        b".......##.......",
        b".....######.....",
        b".....#######....",
        b".....#######....",
        b".....######.....",
        b"......####......",
        b"......#..#......",
        b".......#.#......",
        b"......##.##.....",
        b"................",
    ],
];

pub(super) const EMBER_PALETTE: Palette = &[
    (b'r', Grb::new(220, 40, 0)),
    (b'y', Grb::new(255, 180, 0)),
    (b'w', Grb::new(255, 255, 255)),
    (b'k', Grb::new(20, 0, 0)),
];

pub(super) const EMBER_STOP: Art = [
    b"................",
    b".......r........",
    b"......rr........",
    b".....rrr..r.....",
    b"....rryrr.rr....",
    b"....ryyyrrrr....",
    b"...rryyyyyrr....",
    b"...ryywkyywkr...",
    b"...ryywkyywkr...",
    b"...ryyyyyyyyr...",
    b"...rryyyyyyrr...",
    b"....rryyyyrr....",
    b".....rrrrrr.....",
    b"......r..r......",
    b".....rr..rr.....",
    b"................",
];

pub(super) const EMBER_RIGHT: [Art; 2] = [
    [
        b"................",
        b"........r.......",
        b".......rr.......",
        b"......rrr..r....",
        b".....rryrr.rr...",
        b".....ryyyrrrr...",
        b"....rryyyyyrr...",
        b"....ryyyywkyr...",
        b"....ryyyywkyr...",
        b"....ryyyyyyyr...",
        b"....rryyyyyrr...",
        b".....rryyyrr....",
        b"......rrrrr.....",
        b".....r....r.....",
        b"....rr.....rr...",
        b"................",
    ],
    [
        b"................",
        b".......r........",
        b"........rr......",
        b"......rrr.r.....",
        b".....rryrrrr....",
        b".....ryyyrrr....",
        b"....rryyyyyrr...",
        b"....ryyyywkyr...",
        b"....ryyyywkyr...",
        b"....ryyyyyyyr...",
        b"....rryyyyyrr...",
        b".....rryyyrr....",
        b"......rrrrr.....",
        b".......r.r......",
        b"......rr.rr.....",
        b"................",
    ],
];

pub(super) const DRIFT_PALETTE: Palette = &[
    (b'w', Grb::new(180, 200, 255)),
    (b'b', Grb::new(0, 0, 120)),
];

pub(super) const DRIFT_STOP: Art = [
    b"................",
    b"................",
    b"......wwww......",
    b"....wwwwwwww....",
    b"...wwwwwwwwww...",
    b"...wwbbwwbbww...",
    b"..wwwbbwwbbwww..",
    b"..wwwwwwwwwwww..",
    b"..wwwwwwwwwwww..",
    b"..wwwwwwwwwwww..",
    b"..wwwwwwwwwwww..",
    b"..wwwwwwwwwwww..",
    b"..wwwwwwwwwwww..",
    b"..ww.www.www.w..",
    b"..w...w...w.....",
    b"................",
];

pub(super) const DRIFT_FLOAT: [Art; 2] = [
    [
        b"................",
        b"......wwww......",
        b"....wwwwwwww....",
        b"...wwwwwwwwww...",
        b"...wwwwbbwwbb...",
        b"..wwwwwbbwwbbw..",
        b"..wwwwwwwwwwww..",
        b"..wwwwwwwwwwww..",
        b"..wwwwwwwwwwww..",
        b"..wwwwwwwwwwww..",
        b"..wwwwwwwwwwww..",
        b"..wwwwwwwwwwww..",
        b"..w.www.www.ww..",
        b"......w...w...w.",
        b"................",
        b"................",
    ],
    [
        b"................",
        b"................",
        b"......wwww......",
        b"....wwwwwwww....",
        b"...wwwwwwwwww...",
        b"...wwwwbbwwbb...",
        b"..wwwwwbbwwbbw..",
        b"..wwwwwwwwwwww..",
        b"..wwwwwwwwwwww..",
        b"..wwwwwwwwwwww..",
        b"..wwwwwwwwwwww..",
        b"..wwwwwwwwwwww..",
        b"..wwwwwwwwwwww..",
        b"..www.www.www...",
        b"....w...w...w...",
        b"................",
    ],
];
