use crate::services::BatteryReading;
use chrono::{DateTime, Local};

/// Cached system status the layout is built from.
///
/// Updated synchronously by the shell's event handlers; every update
/// invalidates the active layout, so the builder always sees a coherent
/// snapshot.
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    /// Formatted clock text, e.g. `"9:41"`.  Empty until the first tick.
    pub time_text: String,
    /// AM/PM suffix; only meaningful in 12-hour mode.
    pub time_suffix: String,
    /// Battery percentage as text, e.g. `"87"`.
    pub battery_text: String,
    pub battery: BatteryReading,
    pub connected: bool,
}

impl StatusState {
    pub fn apply_tick(&mut self, now: &DateTime<Local>, twelve_hour: bool) {
        if twelve_hour {
            self.time_text = strip_leading_zero(now.format("%I:%M").to_string());
            self.time_suffix = now.format("%p").to_string();
        } else {
            self.time_text = strip_leading_zero(now.format("%H:%M").to_string());
        }
    }

    pub fn apply_battery(&mut self, reading: BatteryReading) {
        self.battery = reading;
        self.battery_text = reading.percent.to_string();
    }

    pub fn apply_link(&mut self, connected: bool) {
        self.connected = connected;
    }
}

/// Both `%H` and `%I` pad the hour ("09:41"); the strip shows "9:41".
fn strip_leading_zero(mut text: String) -> String {
    if text.starts_with('0') && text.len() > 1 {
        text.remove(0);
    }
    text
}
