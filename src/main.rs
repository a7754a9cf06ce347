//! strip — three-region status strip engine, with a terminal demo loop.
//!
//! Run with:  `RUST_LOG=info strip`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod app;
mod framebuffer;
mod icons;

// The core is strictly single-threaded; a current-thread runtime keeps the
// shell on one task while the monitor and watcher feed it events.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("strip v{} starting", env!("CARGO_PKG_VERSION"));

    app::run().await
}
