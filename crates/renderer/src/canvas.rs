use strip_core::{Alignment, Bitmap, Color, CompositeMode, FontId, Rect, TextMeasure, TextOverflow};

/// Drawing primitives the renderer paints with.
///
/// Implemented by the embedding application (a framebuffer, a compositor
/// surface, a test recorder).  Measurement is a supertrait because drawing
/// and measuring must agree on glyph metrics.
pub trait Canvas: TextMeasure {
    /// Composite `bitmap` into `dest`.
    fn blit(&mut self, bitmap: &Bitmap, dest: Rect, mode: CompositeMode);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn draw_text(
        &mut self,
        text: &str,
        font: FontId,
        rect: Rect,
        overflow: TextOverflow,
        align: Alignment,
    );
}
