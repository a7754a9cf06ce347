use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `strip.toml`.
///
/// Every field has a default mirroring the reference 144×168 display, so an
/// absent or partial file always yields a usable config.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StripConfig {
    pub display: DisplayConfig,
    pub spacing: SpacingConfig,
    pub clock: ClockConfig,
    pub battery: BatteryConfig,
}

/// Physical surface the strip sits on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Full surface width in pixels; also the strip's width budget.
    pub width: i32,
    /// Full surface height (strip + body).
    pub height: i32,
    /// Height of the strip layer itself.
    pub strip_height: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 144,
            height: 168,
            strip_height: 20,
        }
    }
}

/// Pixel gaps and paddings used by measurement and rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpacingConfig {
    /// Gap preceding every laid-out element.
    pub gap: i32,
    /// Gap between an element's icon and its text.
    pub internal_gap: i32,
    /// Recommended icon width, reserved when deriving the max text width.
    pub icon_width: i32,
    /// Extra edge padding for the system text elements (AM/PM, battery %).
    pub text_pad: i32,
    /// Extra edge padding for the system border icons (link, battery).
    pub border_pad: i32,
    /// Vertical adjustment applied to all text baselines.
    pub text_adjust_y: i32,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            gap: 4,
            internal_gap: 1,
            icon_width: 11,
            text_pad: 2,
            border_pad: 3,
            text_adjust_y: -4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// Force 12-hour (`true`) or 24-hour (`false`) display; `None` follows
    /// the platform clock's preference.
    pub twelve_hour: Option<bool>,
}

/// Battery gauge tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BatteryConfig {
    /// Charging: at or below this percent the "low" tier icon shows; the
    /// "full" tier starts at the symmetric complement.
    pub tier_threshold: u8,
    /// How much charge can be missing while the gauge still reads full.
    pub full_missing: u8,
    /// How much charge must be missing for the gauge to read empty.
    pub empty_missing: u8,
    /// Gauge interior origin, relative to the battery icon.
    pub origin_x: i32,
    pub origin_y: i32,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            tier_threshold: 30,
            full_missing: 20,
            empty_missing: 100,
            origin_x: 3,
            origin_y: 5,
        }
    }
}
