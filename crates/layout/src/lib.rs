//! Three-region layout engine for the status strip.
//!
//! A [`Layout`] is built fresh for every paint from the current system
//! state and the item catalog, under a hard width budget with no
//! backtracking: elements are attempted in priority order and silently
//! dropped when the symmetric fit rule would be violated.

pub mod builder;
pub mod item;
pub mod layout;
pub mod metrics;

#[cfg(test)]
pub(crate) mod testutil;

pub use builder::{build_layout, BuildContext};
pub use item::{GaugeSpec, IconPart, ItemParts, LayoutItem, TextPart};
pub use layout::{Layout, Region};
pub use metrics::Metrics;
