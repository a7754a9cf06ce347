//! Host implementations of the strip's consumed capabilities: wall clock,
//! battery, connectivity, and the background monitor task that turns
//! polled state into edge-triggered [`StatusEvent`]s.
//!
//! [`StatusEvent`]: strip_core::StatusEvent

pub mod battery;
pub mod clock;
pub mod link;
pub mod monitor;

pub use battery::SysfsBattery;
pub use clock::SystemClock;
pub use link::SysfsLink;
pub use monitor::spawn_monitor;
