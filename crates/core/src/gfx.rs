//! Geometry and pixel types shared by the layout engine and the renderer.
//!
//! The strip targets 1-bit displays: a [`Bitmap`] is a plain grid of on/off
//! pixels, and drawing is described in terms of two compositing modes and
//! two colors.  Actual drawing is a capability implemented outside this
//! workspace's core (see `strip_renderer::Canvas`).

/// Horizontal placement of a strip element: which of the three regions it
/// belongs to, and how its text is justified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    #[must_use]
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }
}

/// Monochrome bitmap, row-major, one `bool` per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: i32,
    height: i32,
    bits: Vec<bool>,
}

impl Bitmap {
    /// Blank (all-clear) bitmap.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            width: width.max(0),
            height: height.max(0),
            bits: vec![false; len],
        }
    }

    /// Build a bitmap from ASCII art: `'#'` = ink, anything else = clear.
    /// Row widths are padded to the longest row.
    #[must_use]
    pub fn from_art(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let mut bitmap = Self::new(width, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    bitmap.set(x as i32, y as i32);
                }
            }
        }
        bitmap
    }

    #[must_use]
    pub fn bounds(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Pixel at `(x, y)`; out-of-range reads are clear.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return false;
        }
        self.bits[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.bits[(y * self.width + x) as usize] = true;
    }
}

/// Bitmap compositing mode.
///
/// The strip draws light icons on a dark background; `Or` flips the
/// polarity so the same artwork still reads when drawn over an already-lit
/// area (the "full" charging tier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeMode {
    /// Ink pixels light up the destination.
    Set,
    /// Clear pixels light up the destination.
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

/// What to do with text that exceeds its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOverflow {
    Clip,
    TrailingEllipsis,
}
