pub mod catalog;
pub mod error;
pub mod event;
pub mod gfx;
pub mod item;
pub mod resources;
pub mod services;
pub mod state;

pub use catalog::Catalog;
pub use error::{Result, StripError};
pub use event::StatusEvent;
pub use gfx::{Alignment, Bitmap, Color, CompositeMode, Point, Rect, Size, TextOverflow};
pub use item::{EdgeDistance, Item, ItemId, ItemSpec};
pub use resources::{ResourceIds, SystemResources};
pub use services::{
    BatteryReading, BatterySource, Clock, FontId, IconId, IconStore, LinkSource, TextMeasure,
};
pub use state::StatusState;
