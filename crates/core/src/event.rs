use crate::services::BatteryReading;
use chrono::{DateTime, Local};

/// All events that can invalidate the strip's cached state.
///
/// Sources:
/// - Monitor task (`strip-system`) → `Tick`, `Battery`, `Link`
/// - Config watcher task           → `ConfigReloaded`
#[derive(Debug, Clone)]
pub enum StatusEvent {
    /// Wall-clock tick.  The strip itself only reacts on minute boundaries;
    /// caller subscriptions see every tick.
    Tick(DateTime<Local>),
    /// Battery percentage or charging flag changed.
    Battery(BatteryReading),
    /// Connectivity came up (`true`) or went down (`false`).
    Link(bool),
    /// Config file changed on disk — triggers a metrics reload.
    ConfigReloaded,
}
