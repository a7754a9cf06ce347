use crate::item::{GaugeSpec, IconPart, ItemParts, TextPart};
use crate::layout::Layout;
use crate::metrics::Metrics;
use strip_core::{Alignment, Catalog, EdgeDistance, StatusState, SystemResources, TextMeasure};

/// Inputs for one layout pass.  Everything is borrowed: the builder never
/// stores state across passes.
pub struct BuildContext<'a> {
    pub status: &'a StatusState,
    pub catalog: &'a Catalog,
    pub resources: &'a SystemResources,
    pub metrics: &'a Metrics,
    /// Suppress the clock (and its AM/PM suffix) entirely.
    pub hide_clock: bool,
    /// 12-hour mode adds the AM/PM suffix element.
    pub twelve_hour: bool,
}

/// Project current system state plus the catalog into a width-budgeted
/// three-region arrangement.
///
/// The fixed build order *is* the priority policy: earlier entries always
/// get space if it exists, later entries are silently dropped on overflow.
/// Order: clock text → AM/PM suffix → battery icon → link icon → catalog
/// items in registration order → battery percent text.
#[must_use]
pub fn build_layout(ctx: &BuildContext<'_>, measure: &dyn TextMeasure) -> Layout {
    let mut layout = Layout::new();
    let m = ctx.metrics;
    let res = ctx.resources;

    if !ctx.hide_clock {
        layout.add_item(
            Alignment::Center,
            EdgeDistance::SystemText,
            ItemParts {
                distance_offset: m.clock_offset,
                icon: None,
                text: Some(TextPart {
                    text: ctx.status.time_text.clone(),
                    font: res.font_bold,
                }),
            },
            m,
            measure,
        );

        if ctx.twelve_hour {
            layout.add_item(
                Alignment::Center,
                EdgeDistance::SystemText,
                ItemParts {
                    distance_offset: m.suffix_offset,
                    icon: None,
                    text: Some(TextPart {
                        text: ctx.status.time_suffix.clone(),
                        font: res.font_small,
                    }),
                },
                m,
                measure,
            );
        }
    }

    // Battery icon, gauge overlay included — always attempted.
    layout.add_item(
        Alignment::End,
        EdgeDistance::SystemIcon,
        ItemParts {
            distance_offset: m.border_icon_offset,
            icon: Some(IconPart {
                bitmap: res.icon_battery.clone(),
                gauge: Some(GaugeSpec {
                    reading: ctx.status.battery,
                    full_missing: m.gauge_full_missing,
                    empty_missing: m.gauge_empty_missing,
                    origin: m.gauge_origin,
                }),
            }),
            text: None,
        },
        m,
        measure,
    );

    if ctx.status.connected {
        layout.add_item(
            Alignment::Start,
            EdgeDistance::SystemIcon,
            ItemParts {
                distance_offset: m.border_icon_offset,
                icon: Some(IconPart {
                    bitmap: res.icon_link.clone(),
                    gauge: None,
                }),
                text: None,
            },
            m,
            measure,
        );
    }

    // Registered items: only those currently shown (icon loaded) and
    // connectivity-eligible.
    for item in ctx.catalog.iter() {
        let Some(icon) = item.icon() else { continue };
        if item.needs_link() && !ctx.status.connected {
            continue;
        }
        layout.add_item(
            item.alignment(),
            item.distance(),
            ItemParts {
                distance_offset: 0,
                icon: Some(IconPart {
                    bitmap: icon.clone(),
                    gauge: None,
                }),
                text: item.text().map(|t| TextPart {
                    text: t.to_owned(),
                    font: res.font_small,
                }),
            },
            m,
            measure,
        );
    }

    layout.add_item(
        Alignment::End,
        EdgeDistance::SystemText,
        ItemParts {
            distance_offset: m.battery_text_offset,
            icon: None,
            text: Some(TextPart {
                text: ctx.status.battery_text.clone(),
                font: res.font_bold,
            }),
        },
        m,
        measure,
    );

    layout
}
