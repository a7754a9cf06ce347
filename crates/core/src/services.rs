//! Capabilities the strip consumes but does not implement: wall clock,
//! battery, connectivity, resource loading, and text measurement.
//!
//! `strip-system` provides host implementations of the first three; the
//! embedding application supplies the resource store and the text engine.

use crate::gfx::{Alignment, Bitmap, Size, TextOverflow};
use crate::Result;
use chrono::{DateTime, Local};
use std::rc::Rc;

/// Numeric key of a bitmap resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconId(pub u32);

/// Numeric key of a font resource.  Fonts stay opaque to the core; only the
/// text engine resolves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// Battery snapshot as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatteryReading {
    /// Charge level, 0–100.
    pub percent: u8,
    pub charging: bool,
}

/// Wall-clock query with the platform's 12/24-hour display preference.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
    fn twelve_hour(&self) -> bool;
}

pub trait BatterySource {
    fn read(&self) -> BatteryReading;
}

pub trait LinkSource {
    fn connected(&self) -> bool;
}

/// Bitmap resource loader keyed by [`IconId`].
pub trait IconStore {
    fn load(&self, id: IconId) -> Result<Rc<Bitmap>>;
}

/// Text measurement.  `bounds` caps the reported size; `overflow` describes
/// how the eventual draw will truncate, so measurement and drawing agree.
pub trait TextMeasure {
    fn content_size(
        &self,
        text: &str,
        font: FontId,
        bounds: Size,
        overflow: TextOverflow,
        align: Alignment,
    ) -> Size;
}
