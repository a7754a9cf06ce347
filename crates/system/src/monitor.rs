use std::time::Duration;
use strip_core::{BatterySource, Clock, LinkSource, StatusEvent};
use tokio::sync::mpsc;
use tokio::time;

/// Spawn a background Tokio task that polls the probes every
/// `interval_ms` milliseconds and forwards [`StatusEvent`]s through the
/// returned channel.
///
/// A `Tick` is sent on every poll; `Battery` and `Link` are edge-triggered
/// (sent on the first poll and then only when the value changes).  The
/// task stops automatically when the receiver is dropped.
pub fn spawn_monitor(
    interval_ms: u64,
    clock: impl Clock + Send + 'static,
    battery: impl BatterySource + Send + 'static,
    link: impl LinkSource + Send + 'static,
) -> mpsc::Receiver<StatusEvent> {
    let (tx, rx) = mpsc::channel(8);
    let interval = Duration::from_millis(interval_ms);

    tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        let mut last_battery = None;
        let mut last_link = None;

        loop {
            ticker.tick().await;

            if tx.send(StatusEvent::Tick(clock.now())).await.is_err() {
                break; // all receivers dropped
            }

            let reading = battery.read();
            if last_battery != Some(reading) {
                last_battery = Some(reading);
                tracing::debug!(?reading, "battery changed");
                if tx.send(StatusEvent::Battery(reading)).await.is_err() {
                    break;
                }
            }

            let connected = link.connected();
            if last_link != Some(connected) {
                last_link = Some(connected);
                tracing::debug!(connected, "link changed");
                if tx.send(StatusEvent::Link(connected)).await.is_err() {
                    break;
                }
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local};
    use strip_core::BatteryReading;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            Local::now()
        }

        fn twelve_hour(&self) -> bool {
            false
        }
    }

    struct FixedBattery;

    impl BatterySource for FixedBattery {
        fn read(&self) -> BatteryReading {
            BatteryReading {
                percent: 42,
                charging: false,
            }
        }
    }

    struct FixedLink;

    impl LinkSource for FixedLink {
        fn connected(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn first_poll_reports_everything_then_edges_only() {
        let mut rx = spawn_monitor(5, FixedClock, FixedBattery, FixedLink);

        assert!(matches!(rx.recv().await.unwrap(), StatusEvent::Tick(_)));
        assert!(matches!(
            rx.recv().await.unwrap(),
            StatusEvent::Battery(BatteryReading { percent: 42, .. })
        ));
        assert!(matches!(rx.recv().await.unwrap(), StatusEvent::Link(true)));

        // Values never change again, so subsequent polls are ticks only.
        assert!(matches!(rx.recv().await.unwrap(), StatusEvent::Tick(_)));
        assert!(matches!(rx.recv().await.unwrap(), StatusEvent::Tick(_)));
    }
}
