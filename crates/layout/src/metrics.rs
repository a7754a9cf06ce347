use strip_config::StripConfig;
use strip_core::Point;

/// Pixel metrics compiled from [`StripConfig`], shared by the layout
/// builder and the renderer.
///
/// Distance offsets are relative to the standard inter-item gap and may be
/// negative (the clock's offset cancels the gap entirely so centered time
/// text sits tight).
#[derive(Debug, Clone)]
pub struct Metrics {
    /// The strip's hard width budget.
    pub strip_width: i32,
    pub strip_height: i32,
    /// Full surface height; the body sub-surface gets the remainder.
    pub window_height: i32,
    pub item_gap: i32,
    /// Gap between an element's icon and its text.
    pub internal_gap: i32,
    pub text_adjust_y: i32,
    /// Measurement cap for any single text part.
    pub max_text_width: i32,

    pub clock_offset: i32,
    pub suffix_offset: i32,
    pub battery_text_offset: i32,
    pub border_icon_offset: i32,

    pub charge_tier_threshold: u8,
    pub gauge_full_missing: u8,
    pub gauge_empty_missing: u8,
    /// Gauge interior origin, relative to the battery icon's corner.
    pub gauge_origin: Point,
}

impl Metrics {
    #[must_use]
    pub fn from_config(config: &StripConfig) -> Self {
        let gap = config.spacing.gap;
        let border_icon_offset = config.spacing.border_pad - gap;
        Self {
            strip_width: config.display.width,
            strip_height: config.display.strip_height,
            window_height: config.display.height,
            item_gap: gap,
            internal_gap: config.spacing.internal_gap,
            text_adjust_y: config.spacing.text_adjust_y,
            max_text_width: config.display.width
                - 2 * config.spacing.icon_width
                - 4 * gap
                - 2 * border_icon_offset,
            clock_offset: -gap,
            suffix_offset: config.spacing.text_pad - gap,
            battery_text_offset: config.spacing.text_pad - gap,
            border_icon_offset,
            charge_tier_threshold: config.battery.tier_threshold,
            gauge_full_missing: config.battery.full_missing,
            gauge_empty_missing: config.battery.empty_missing,
            gauge_origin: Point::new(config.battery.origin_x, config.battery.origin_y),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::from_config(&StripConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_display_metrics() {
        let m = Metrics::default();
        assert_eq!(m.strip_width, 144);
        assert_eq!(m.item_gap, 4);
        // 144 - 2*11 - 4*4 - 2*(-1)
        assert_eq!(m.max_text_width, 108);
        assert_eq!(m.clock_offset, -4);
        assert_eq!(m.suffix_offset, -2);
        assert_eq!(m.border_icon_offset, -1);
    }
}
