use crate::canvas::Canvas;
use strip_core::{Color, CompositeMode, Point, Rect, SystemResources};
use strip_layout::{GaugeSpec, Metrics};

const CHARGE_MAX: i32 = 100;

/// Composite the battery gauge over an already-blitted battery icon at
/// `icon_origin`.
///
/// Charging picks one of three tier icons; the "full" tier flips the
/// compositing polarity so the bolt still reads over the lit gauge area.
/// Discharging paints the charged portion as a solid fill, interpolated
/// from the missing-charge percent clamped into the gauge's thresholds.
pub fn render_gauge(
    gauge: &GaugeSpec,
    canvas: &mut dyn Canvas,
    resources: &SystemResources,
    metrics: &Metrics,
    icon_origin: Point,
) {
    // The charging bolt's bounds double as the gauge interior.
    let bounds = resources.icon_charging.bounds();
    let rect = Rect::new(
        icon_origin.x + gauge.origin.x,
        icon_origin.y + gauge.origin.y,
        bounds.w,
        bounds.h,
    );
    let percent = i32::from(gauge.reading.percent);
    let missing = CHARGE_MAX - percent;

    if gauge.reading.charging {
        let threshold = i32::from(metrics.charge_tier_threshold);
        if percent <= threshold {
            canvas.blit(&resources.icon_charging, rect, CompositeMode::Set);
        } else if missing < threshold {
            canvas.blit(&resources.icon_charging, rect, CompositeMode::Or);
        } else {
            canvas.blit(&resources.icon_charging_half, rect, CompositeMode::Set);
        }
    } else {
        let full = i32::from(gauge.full_missing);
        let empty = i32::from(gauge.empty_missing);
        let missing = missing.clamp(full, empty);

        // Integer division rounds the missing band down, i.e. ties fill
        // toward a fuller appearance.
        let missing_h = (missing - full) * bounds.h / (empty - full).max(1);
        let fill = Rect::new(
            rect.origin.x,
            rect.origin.y + missing_h,
            bounds.w,
            bounds.h - missing_h,
        );
        canvas.fill_rect(fill, Color::White);
    }
}
