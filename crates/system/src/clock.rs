use chrono::{DateTime, Local};
use strip_core::Clock;

/// Host wall clock with a fixed 12/24-hour display preference.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    twelve_hour: bool,
}

impl SystemClock {
    #[must_use]
    pub fn new(twelve_hour: bool) -> Self {
        Self { twelve_hour }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn twelve_hour(&self) -> bool {
        self.twelve_hour
    }
}
