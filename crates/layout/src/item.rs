use crate::metrics::Metrics;
use std::rc::Rc;
use strip_core::{
    Alignment, BatteryReading, Bitmap, EdgeDistance, FontId, Point, Size, TextMeasure,
    TextOverflow,
};

/// Battery-gauge overlay carried by the battery icon element.
#[derive(Debug, Clone)]
pub struct GaugeSpec {
    pub reading: BatteryReading,
    /// Missing-charge percent at which the gauge still reads full.
    pub full_missing: u8,
    /// Missing-charge percent at which the gauge reads empty.
    pub empty_missing: u8,
    /// Gauge interior origin, relative to the icon's top-left corner.
    pub origin: Point,
}

#[derive(Debug, Clone)]
pub struct TextPart {
    pub text: String,
    pub font: FontId,
}

#[derive(Debug, Clone)]
pub struct IconPart {
    pub bitmap: Rc<Bitmap>,
    pub gauge: Option<GaugeSpec>,
}

/// Render-ready parts of one layout element.  The capability set varies
/// per element instance: icon-only, text-only, or both.
#[derive(Debug, Clone, Default)]
pub struct ItemParts {
    pub distance_offset: i32,
    pub icon: Option<IconPart>,
    pub text: Option<TextPart>,
}

/// An ephemeral, measured element of one region.
///
/// Built fresh each layout pass; discarded wholesale when the layout is
/// invalidated.  Never outlives the snapshot it was measured from.
#[derive(Debug, Clone)]
pub struct LayoutItem {
    pub alignment: Alignment,
    pub distance: EdgeDistance,
    pub parts: ItemParts,
    /// Computed pixel width: inter-item gap + distance offset + icon width
    /// (+ internal gap when icon and text are both present) + measured
    /// text width.
    pub width: i32,
}

impl LayoutItem {
    pub fn measure(
        alignment: Alignment,
        distance: EdgeDistance,
        parts: ItemParts,
        metrics: &Metrics,
        measure: &dyn TextMeasure,
    ) -> Self {
        let mut width = metrics.item_gap + parts.distance_offset;

        if let Some(icon) = &parts.icon {
            width += icon.bitmap.bounds().w;
        }

        if let Some(text) = &parts.text {
            if parts.icon.is_some() {
                width += metrics.internal_gap;
            }
            let size = measure.content_size(
                &text.text,
                text.font,
                Size::new(metrics.max_text_width, metrics.strip_height),
                TextOverflow::TrailingEllipsis,
                alignment,
            );
            width += size.w;
        }

        Self {
            alignment,
            distance,
            parts,
            width,
        }
    }
}
