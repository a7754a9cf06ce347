use std::path::PathBuf;
use strip_core::{BatteryReading, BatterySource};

/// Battery probe backed by the Linux sysfs power-supply interface.
///
/// Reports a full, discharging reading when no battery is present
/// (desktop, VM) so the strip still shows a plausible gauge.
#[derive(Debug, Clone)]
pub struct SysfsBattery {
    root: PathBuf,
}

impl Default for SysfsBattery {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/sys/class/power_supply"),
        }
    }
}

impl SysfsBattery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe rooted at `root` instead of the live sysfs tree.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn probe(&self) -> Option<BatteryReading> {
        for name in ["BAT0", "BAT1", "BAT2"] {
            let base = self.root.join(name);
            if !base.exists() {
                continue;
            }

            let capacity = std::fs::read_to_string(base.join("capacity")).ok()?;
            let status = std::fs::read_to_string(base.join("status")).ok()?;

            let percent = capacity.trim().parse::<u8>().ok()?.min(100);
            let charging = matches!(status.trim(), "Charging" | "Full");

            return Some(BatteryReading { percent, charging });
        }
        None
    }
}

impl BatterySource for SysfsBattery {
    fn read(&self) -> BatteryReading {
        self.probe().unwrap_or(BatteryReading {
            percent: 100,
            charging: false,
        })
    }
}
