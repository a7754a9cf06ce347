use crate::canvas::Canvas;
use crate::gauge::render_gauge;
use strip_core::{Alignment, CompositeMode, Rect, Size, SystemResources, TextOverflow};
use strip_layout::{Layout, LayoutItem, Metrics};

/// Paint a built layout.
///
/// Each region walks its chain with a running pixel cursor: the start
/// region from 0, the center region from `(strip_width - center_width)/2`,
/// the end region from 0 with every x mirrored against the strip width at
/// draw time (so its first element lands nearest the edge).
pub fn render(
    layout: &Layout,
    canvas: &mut dyn Canvas,
    metrics: &Metrics,
    resources: &SystemResources,
) {
    let mut x = 0;
    for item in layout.start().items() {
        x = render_item(item, canvas, metrics, resources, x);
    }

    let mut x = (metrics.strip_width - layout.center().width()) / 2;
    for item in layout.center().items() {
        x = render_item(item, canvas, metrics, resources, x);
    }

    let mut x = 0;
    for item in layout.end().items() {
        x = render_item(item, canvas, metrics, resources, x);
    }
}

/// Returns the cursor after this element.  End-aligned elements draw text
/// before icon (nearest-to-edge part first); all others icon before text.
fn render_item(
    item: &LayoutItem,
    canvas: &mut dyn Canvas,
    metrics: &Metrics,
    resources: &SystemResources,
    mut offset_x: i32,
) -> i32 {
    offset_x += metrics.item_gap + item.parts.distance_offset;

    if item.alignment == Alignment::End {
        offset_x += render_text(item, canvas, metrics, offset_x);
        offset_x += render_icon(item, canvas, metrics, resources, offset_x);
    } else {
        offset_x += render_icon(item, canvas, metrics, resources, offset_x);
        offset_x += render_text(item, canvas, metrics, offset_x);
    }

    offset_x
}

/// Returns the rendered icon width (internal gap included), 0 without an
/// icon part.
fn render_icon(
    item: &LayoutItem,
    canvas: &mut dyn Canvas,
    metrics: &Metrics,
    resources: &SystemResources,
    offset_x: i32,
) -> i32 {
    let Some(icon) = &item.parts.icon else {
        return 0;
    };

    let internal = if item.parts.text.is_some() {
        metrics.internal_gap
    } else {
        0
    };
    let bounds = icon.bitmap.bounds();

    // Vertical centering rounds up.
    let icon_y = (metrics.strip_height - bounds.h + 1) / 2;
    let icon_x = if item.alignment == Alignment::End {
        metrics.strip_width - offset_x - bounds.w - internal
    } else {
        offset_x
    };

    canvas.blit(
        &icon.bitmap,
        Rect::new(icon_x, icon_y, bounds.w, bounds.h),
        CompositeMode::Set,
    );

    if let Some(gauge) = &icon.gauge {
        render_gauge(
            gauge,
            canvas,
            resources,
            metrics,
            strip_core::Point::new(icon_x, icon_y),
        );
    }

    bounds.w + internal
}

/// Returns the rendered text width, 0 without a text part.
fn render_text(
    item: &LayoutItem,
    canvas: &mut dyn Canvas,
    metrics: &Metrics,
    offset_x: i32,
) -> i32 {
    let Some(text) = &item.parts.text else {
        return 0;
    };

    let size = canvas.content_size(
        &text.text,
        text.font,
        Size::new(metrics.max_text_width, metrics.strip_height),
        TextOverflow::TrailingEllipsis,
        item.alignment,
    );

    let text_x = if item.alignment == Alignment::End {
        metrics.strip_width - offset_x - size.w
    } else {
        offset_x
    };

    canvas.draw_text(
        &text.text,
        text.font,
        Rect::new(
            text_x,
            metrics.text_adjust_y + metrics.strip_height - size.h,
            size.w,
            size.h,
        ),
        TextOverflow::TrailingEllipsis,
        item.alignment,
    );

    size.w
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use strip_core::{
        BatteryReading, Bitmap, Color, FontId, Point, TextMeasure,
    };
    use strip_layout::{GaugeSpec, IconPart, ItemParts, TextPart};

    #[derive(Debug, PartialEq, Eq)]
    enum Op {
        Blit {
            src: Size,
            rect: Rect,
            mode: CompositeMode,
        },
        Fill {
            rect: Rect,
            color: Color,
        },
        Text {
            text: String,
            rect: Rect,
        },
    }

    /// Records draw calls; glyphs are 6px wide, 10px tall.
    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl TextMeasure for Recorder {
        fn content_size(
            &self,
            text: &str,
            _font: FontId,
            bounds: Size,
            _overflow: TextOverflow,
            _align: Alignment,
        ) -> Size {
            Size::new((text.chars().count() as i32 * 6).min(bounds.w), 10)
        }
    }

    impl Canvas for Recorder {
        fn blit(&mut self, bitmap: &Bitmap, dest: Rect, mode: CompositeMode) {
            self.ops.push(Op::Blit {
                src: bitmap.bounds(),
                rect: dest,
                mode,
            });
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.ops.push(Op::Fill { rect, color });
        }

        fn draw_text(
            &mut self,
            text: &str,
            _font: FontId,
            rect: Rect,
            _overflow: TextOverflow,
            _align: Alignment,
        ) {
            self.ops.push(Op::Text {
                text: text.to_owned(),
                rect,
            });
        }
    }

    fn metrics() -> Metrics {
        Metrics::default()
    }

    fn resources() -> SystemResources {
        SystemResources {
            icon_link: Rc::new(Bitmap::new(9, 12)),
            icon_battery: Rc::new(Bitmap::new(11, 14)),
            icon_charging: Rc::new(Bitmap::new(5, 8)),
            icon_charging_half: Rc::new(Bitmap::new(4, 8)),
            font_bold: FontId(1),
            font_small: FontId(2),
        }
    }

    fn icon_only(w: i32, h: i32) -> ItemParts {
        ItemParts {
            distance_offset: 0,
            icon: Some(IconPart {
                bitmap: Rc::new(Bitmap::new(w, h)),
                gauge: None,
            }),
            text: None,
        }
    }

    fn add(
        layout: &mut Layout,
        alignment: Alignment,
        parts: ItemParts,
        m: &Metrics,
        canvas: &Recorder,
    ) {
        assert!(layout.add_item(alignment, strip_core::EdgeDistance::Close, parts, m, canvas));
    }

    #[test]
    fn start_region_advances_cursor_left_to_right() {
        let m = metrics();
        let res = resources();
        let mut canvas = Recorder::default();
        let mut layout = Layout::new();
        add(&mut layout, Alignment::Start, icon_only(10, 12), &m, &canvas);
        add(&mut layout, Alignment::Start, icon_only(8, 12), &m, &canvas);

        render(&layout, &mut canvas, &m, &res);

        // First icon at gap=4; second at 4+10+4.
        assert_eq!(
            canvas.ops,
            vec![
                Op::Blit {
                    src: Size::new(10, 12),
                    rect: Rect::new(4, 4, 10, 12),
                    mode: CompositeMode::Set
                },
                Op::Blit {
                    src: Size::new(8, 12),
                    rect: Rect::new(18, 4, 8, 12),
                    mode: CompositeMode::Set
                },
            ]
        );
    }

    #[test]
    fn center_region_starts_centered() {
        let m = metrics();
        let res = resources();
        let mut canvas = Recorder::default();
        let mut layout = Layout::new();
        // Text "9:41" measures 24px; clock offset cancels the gap.
        add(
            &mut layout,
            Alignment::Center,
            ItemParts {
                distance_offset: -4,
                icon: None,
                text: Some(TextPart {
                    text: "9:41".into(),
                    font: FontId(1),
                }),
            },
            &m,
            &canvas,
        );

        render(&layout, &mut canvas, &m, &res);

        // Region width 24 → base (144-24)/2 = 60; text y = -4 + 20 - 10.
        assert_eq!(
            canvas.ops,
            vec![Op::Text {
                text: "9:41".into(),
                rect: Rect::new(60, 6, 24, 10),
            }]
        );
    }

    #[test]
    fn end_region_mirrors_and_draws_text_before_icon() {
        let m = metrics();
        let res = resources();
        let mut canvas = Recorder::default();
        let mut layout = Layout::new();
        add(
            &mut layout,
            Alignment::End,
            ItemParts {
                distance_offset: 0,
                icon: Some(IconPart {
                    bitmap: Rc::new(Bitmap::new(10, 12)),
                    gauge: None,
                }),
                text: Some(TextPart {
                    text: "87".into(),
                    font: FontId(1),
                }),
            },
            &m,
            &canvas,
        );

        render(&layout, &mut canvas, &m, &res);

        // Cursor after gap: 4.  Text (12px) mirrored: x = 144-4-12 = 128.
        // Icon then at cursor 16 with internal gap 1: x = 144-16-10-1 = 117.
        assert_eq!(
            canvas.ops,
            vec![
                Op::Text {
                    text: "87".into(),
                    rect: Rect::new(128, 6, 12, 10),
                },
                Op::Blit {
                    src: Size::new(10, 12),
                    rect: Rect::new(117, 4, 10, 12),
                    mode: CompositeMode::Set
                },
            ]
        );
    }

    #[test]
    fn icon_vertical_centering_rounds_up() {
        let m = metrics();
        let res = resources();
        let mut canvas = Recorder::default();
        let mut layout = Layout::new();
        add(&mut layout, Alignment::Start, icon_only(10, 13), &m, &canvas);

        render(&layout, &mut canvas, &m, &res);

        // (20 - 13 + 1) / 2 = 4.
        assert_eq!(
            canvas.ops[0],
            Op::Blit {
                src: Size::new(10, 13),
                rect: Rect::new(4, 4, 10, 13),
                mode: CompositeMode::Set
            }
        );
    }

    fn gauge_layout(reading: BatteryReading) -> Layout {
        let m = metrics();
        let canvas = Recorder::default();
        let mut layout = Layout::new();
        add(
            &mut layout,
            Alignment::End,
            ItemParts {
                distance_offset: -1,
                icon: Some(IconPart {
                    bitmap: Rc::new(Bitmap::new(11, 14)),
                    gauge: Some(GaugeSpec {
                        reading,
                        full_missing: 20,
                        empty_missing: 100,
                        origin: Point::new(3, 5),
                    }),
                }),
                text: None,
            },
            &m,
            &canvas,
        );
        layout
    }

    /// Battery icon x for the gauge layouts: 144 - 3 - 11 = 130; y = 3;
    /// gauge interior at (133, 8), 5x8.
    #[test]
    fn full_charge_fills_whole_gauge() {
        let m = metrics();
        let res = resources();
        let mut canvas = Recorder::default();
        let layout = gauge_layout(BatteryReading {
            percent: 100,
            charging: false,
        });

        render(&layout, &mut canvas, &m, &res);

        assert_eq!(
            canvas.ops[1],
            Op::Fill {
                rect: Rect::new(133, 8, 5, 8),
                color: Color::White
            }
        );
    }

    #[test]
    fn charge_at_empty_threshold_fills_nothing() {
        let m = metrics();
        let res = resources();
        let mut canvas = Recorder::default();
        let layout = gauge_layout(BatteryReading {
            percent: 0,
            charging: false,
        });

        render(&layout, &mut canvas, &m, &res);

        assert_eq!(
            canvas.ops[1],
            Op::Fill {
                rect: Rect::new(133, 16, 5, 0),
                color: Color::White
            }
        );
    }

    #[test]
    fn interpolation_ties_round_toward_full() {
        let m = metrics();
        let res = resources();
        let mut canvas = Recorder::default();
        // Missing 25% → (25-20)*8/80 = 0.5 → 0 missing rows.
        let layout = gauge_layout(BatteryReading {
            percent: 75,
            charging: false,
        });

        render(&layout, &mut canvas, &m, &res);

        assert_eq!(
            canvas.ops[1],
            Op::Fill {
                rect: Rect::new(133, 8, 5, 8),
                color: Color::White
            }
        );
    }

    #[test]
    fn charging_tiers_pick_icon_and_polarity() {
        let m = metrics();
        let res = resources();

        // Low tier: percent at the threshold, normal polarity.
        let mut canvas = Recorder::default();
        render(
            &gauge_layout(BatteryReading {
                percent: 30,
                charging: true,
            }),
            &mut canvas,
            &m,
            &res,
        );
        assert_eq!(
            canvas.ops[1],
            Op::Blit {
                src: Size::new(5, 8),
                rect: Rect::new(133, 8, 5, 8),
                mode: CompositeMode::Set
            }
        );

        // Full tier: missing < threshold, inverted polarity.
        let mut canvas = Recorder::default();
        render(
            &gauge_layout(BatteryReading {
                percent: 80,
                charging: true,
            }),
            &mut canvas,
            &m,
            &res,
        );
        assert_eq!(
            canvas.ops[1],
            Op::Blit {
                src: Size::new(5, 8),
                rect: Rect::new(133, 8, 5, 8),
                mode: CompositeMode::Or
            }
        );

        // Half tier in between: the half bolt, normal polarity.
        let mut canvas = Recorder::default();
        render(
            &gauge_layout(BatteryReading {
                percent: 50,
                charging: true,
            }),
            &mut canvas,
            &m,
            &res,
        );
        assert_eq!(
            canvas.ops[1],
            Op::Blit {
                src: Size::new(4, 8),
                rect: Rect::new(133, 8, 5, 8),
                mode: CompositeMode::Set
            }
        );
    }
}
