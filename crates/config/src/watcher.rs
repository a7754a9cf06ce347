use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Watch a config file for changes.
///
/// Returns a receiver that fires on every detected write; the watcher task
/// stops when the receiver is dropped.  Callers typically respond by
/// reloading the config and invalidating the active layout.
pub fn watch(path: impl AsRef<Path>) -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(watch_loop(path.as_ref().to_path_buf(), tx));
    rx
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", path.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) => {
                use notify::EventKind::{Create, Modify};
                if matches!(e.kind, Modify(_) | Create(_)) && tx.send(()).await.is_err() {
                    break; // receiver dropped
                }
            }
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}
