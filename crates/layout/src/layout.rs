use crate::item::{ItemParts, LayoutItem};
use crate::metrics::Metrics;
use strip_core::{Alignment, EdgeDistance, TextMeasure};

/// One horizontal partition of the strip: an ordered run of layout items,
/// the accumulated width, and the distance watermark that makes tail
/// appends O(1) for non-decreasing insertion order.
#[derive(Debug)]
pub struct Region {
    items: Vec<LayoutItem>,
    width: i32,
    max_distance: EdgeDistance,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            width: 0,
            max_distance: EdgeDistance::SystemIcon,
        }
    }
}

impl Region {
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    /// Accumulated width; always the sum of the member items' widths.
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn max_distance(&self) -> EdgeDistance {
        self.max_distance
    }

    /// Splice `item` into priority order: append at the tail when its
    /// distance is at or above the watermark, otherwise scan for the first
    /// strictly-greater distance (FIFO tie-break among equals).
    fn insert(&mut self, item: LayoutItem) {
        if item.distance >= self.max_distance {
            self.max_distance = item.distance;
            self.items.push(item);
        } else {
            let at = self
                .items
                .iter()
                .position(|existing| item.distance < existing.distance)
                .unwrap_or(self.items.len());
            self.items.insert(at, item);
        }
    }
}

/// The three-region arrangement produced by one build pass.
///
/// Never observable in a state that violates the fit rule: an element that
/// would overflow is rolled back before the call returns.
#[derive(Debug, Default)]
pub struct Layout {
    start: Region,
    center: Region,
    end: Region,
}

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> &Region {
        &self.start
    }

    pub fn center(&self) -> &Region {
        &self.center
    }

    pub fn end(&self) -> &Region {
        &self.end
    }

    pub fn region(&self, alignment: Alignment) -> &Region {
        match alignment {
            Alignment::Start => &self.start,
            Alignment::Center => &self.center,
            Alignment::End => &self.end,
        }
    }

    fn region_mut(&mut self, alignment: Alignment) -> &mut Region {
        match alignment {
            Alignment::Start => &mut self.start,
            Alignment::Center => &mut self.center,
            Alignment::End => &mut self.end,
        }
    }

    /// Measures the element, tentatively accounts its width, and accepts it
    /// only if the fit rule still holds.  On violation the width is
    /// restored and `false` is returned; no other state changes.
    pub fn add_item(
        &mut self,
        alignment: Alignment,
        distance: EdgeDistance,
        parts: ItemParts,
        metrics: &Metrics,
        measure: &dyn TextMeasure,
    ) -> bool {
        let item = LayoutItem::measure(alignment, distance, parts, metrics, measure);
        let width = item.width;

        self.region_mut(alignment).width += width;
        if !self.fits(alignment, metrics) {
            self.region_mut(alignment).width -= width;
            tracing::debug!(?alignment, width, "element over budget; dropped");
            return false;
        }

        self.region_mut(alignment).insert(item);
        true
    }

    /// Symmetric two-sided width-budget check.
    ///
    /// With an empty center the start and end runs merely have to share the
    /// strip.  Once the center is occupied it must stay visually centered:
    /// the start side is checked mirrored (`2*(start+gap) + center`), the
    /// end side likewise, so the center never collides with either edge.
    fn fits(&self, alignment: Alignment, metrics: &Metrics) -> bool {
        let gap = metrics.item_gap;
        let budget = metrics.strip_width;

        if self.center.width == 0 {
            return self.start.width + gap + self.end.width <= budget;
        }

        if alignment != Alignment::End && 2 * (self.start.width + gap) + self.center.width > budget
        {
            return false;
        }
        if alignment != Alignment::Start && self.center.width + 2 * (gap + self.end.width) > budget
        {
            return false;
        }
        true
    }
}
