//! In-memory 1-bit canvas for the demo loop.
//!
//! Pixels render as `#`, text parts are overlaid as their characters, and
//! the whole strip can be dumped as ASCII art into the log.  Glyph metrics
//! are fixed-advance per font, so measurement and drawing always agree.

use strip_core::{
    Alignment, Bitmap, Color, CompositeMode, FontId, Rect, Size, TextMeasure, TextOverflow,
};
use strip_renderer::Canvas;

/// `(advance, height)` of the demo's fixed-advance fonts.
fn font_metrics(font: FontId) -> (i32, i32) {
    match font.0 {
        1 => (7, 14), // bold
        2 => (5, 10), // small
        _ => (6, 12),
    }
}

pub struct FrameBuffer {
    width: i32,
    height: i32,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            cells: vec!['.'; (width.max(0) * height.max(0)) as usize],
        }
    }

    fn put(&mut self, x: i32, y: i32, ch: char) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.cells[(y * self.width + x) as usize] = ch;
    }

    pub fn to_ascii(&self) -> String {
        self.cells
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextMeasure for FrameBuffer {
    fn content_size(
        &self,
        text: &str,
        font: FontId,
        bounds: Size,
        _overflow: TextOverflow,
        _align: Alignment,
    ) -> Size {
        let (advance, height) = font_metrics(font);
        Size::new(
            (text.chars().count() as i32 * advance).min(bounds.w),
            height.min(bounds.h),
        )
    }
}

impl Canvas for FrameBuffer {
    fn blit(&mut self, bitmap: &Bitmap, dest: Rect, mode: CompositeMode) {
        for y in 0..dest.size.h {
            for x in 0..dest.size.w {
                let ink = bitmap.get(x, y);
                let lit = match mode {
                    CompositeMode::Set => ink,
                    CompositeMode::Or => !ink,
                };
                if lit {
                    self.put(dest.origin.x + x, dest.origin.y + y, '#');
                }
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let ch = match color {
            Color::White => '#',
            Color::Black => ' ',
        };
        for y in 0..rect.size.h {
            for x in 0..rect.size.w {
                self.put(rect.origin.x + x, rect.origin.y + y, ch);
            }
        }
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: FontId,
        rect: Rect,
        _overflow: TextOverflow,
        _align: Alignment,
    ) {
        let (advance, _) = font_metrics(font);
        let baseline = rect.origin.y + rect.size.h - 1;

        for (i, ch) in text.chars().enumerate() {
            let x = rect.origin.x + i as i32 * advance;
            if x >= rect.origin.x + rect.size.w {
                break; // clipped; measurement already accounted for this
            }
            self.put(x, baseline, ch);
        }
    }
}
