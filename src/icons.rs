//! Built-in 1-bpp artwork for the demo, keyed by the default resource ids.

use std::rc::Rc;
use strip_core::{Bitmap, IconId, IconStore, Result, StripError};

/// Demo item icons, outside the system id range.
pub const ICON_MAIL: IconId = IconId(10);
pub const ICON_NOTE: IconId = IconId(11);

const LINK: &[&str] = &[
    ".#######.",
    "#.......#",
    "#.#####.#",
    "#.#...#.#",
    "#.#...#.#",
    "#.#...#.#",
    "#.#...#.#",
    "#.#####.#",
    "#.......#",
    "#...#...#",
    "#.......#",
    ".#######.",
];

const BATTERY: &[&str] = &[
    "...#####...",
    ".#########.",
    ".#.......#.",
    ".#.......#.",
    ".#.......#.",
    ".#.......#.",
    ".#.......#.",
    ".#.......#.",
    ".#.......#.",
    ".#.......#.",
    ".#.......#.",
    ".#.......#.",
    ".#.......#.",
    ".#########.",
];

const CHARGING: &[&str] = &[
    "...#.",
    "..##.",
    ".##..",
    "#####",
    "..##.",
    ".##..",
    ".#...",
    "#....",
];

const CHARGING_HALF: &[&str] = &[
    ".....",
    "..#..",
    ".##..",
    "####.",
    ".##..",
    "..#..",
    ".#...",
    ".....",
];

const MAIL: &[&str] = &[
    "##########",
    "##......##",
    "#.#....#.#",
    "#..#..#..#",
    "#...##...#",
    "#........#",
    "#........#",
    "##########",
];

const NOTE: &[&str] = &[
    "....####",
    "....#..#",
    "....#..#",
    "....#...",
    "....#...",
    ".###....",
    "####....",
    ".##.....",
];

/// Resource store serving the hardcoded bitmaps above.
pub struct BuiltinIcons;

impl IconStore for BuiltinIcons {
    fn load(&self, id: IconId) -> Result<Rc<Bitmap>> {
        let art = match id.0 {
            1 => LINK,
            2 => BATTERY,
            3 => CHARGING,
            4 => CHARGING_HALF,
            10 => MAIL,
            11 => NOTE,
            _ => return Err(StripError::Resource(format!("unknown icon id {}", id.0))),
        };
        Ok(Rc::new(Bitmap::from_art(art)))
    }
}
