use std::rc::Rc;
use strip_core::{Alignment, Bitmap, FontId, Size, TextMeasure, TextOverflow};

use crate::item::IconPart;

/// Fixed-advance measurer: every glyph is `advance` pixels wide.
pub(crate) struct FixedMeasure {
    pub advance: i32,
}

impl TextMeasure for FixedMeasure {
    fn content_size(
        &self,
        text: &str,
        _font: FontId,
        bounds: Size,
        _overflow: TextOverflow,
        _align: Alignment,
    ) -> Size {
        let w = (text.chars().count() as i32 * self.advance).min(bounds.w);
        Size::new(w, 10)
    }
}

pub(crate) fn icon_part(w: i32) -> IconPart {
    IconPart {
        bitmap: Rc::new(Bitmap::new(w, 8)),
        gauge: None,
    }
}
