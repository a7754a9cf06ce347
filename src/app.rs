//! Demo event loop: wires the host services into a shell and paints the
//! strip into an in-memory framebuffer whenever its layout is rebuilt.

use crate::framebuffer::FrameBuffer;
use crate::icons::{BuiltinIcons, ICON_MAIL, ICON_NOTE};
use anyhow::Result;
use strip_core::{Alignment, EdgeDistance, ItemId, ItemSpec, ResourceIds};
use strip_system::{spawn_monitor, SysfsBattery, SysfsLink, SystemClock};
use strip_window::{Services, Shell, WindowHooks};
use tracing::{info, warn};

/// Monitor poll interval (milliseconds).
const MONITOR_INTERVAL_MS: u64 = 1_000;

pub async fn run() -> Result<()> {
    let config_path = strip_config::default_path();
    let config = strip_config::load(&config_path).unwrap_or_default();
    let twelve_hour = config.clock.twelve_hour.unwrap_or(false);

    let mut shell = Shell::new(
        &config,
        Services {
            clock: Box::new(SystemClock::new(twelve_hour)),
            battery: Box::new(SysfsBattery::new()),
            link: Box::new(SysfsLink::new()),
            icons: Box::new(BuiltinIcons),
        },
        &ResourceIds::default(),
    )?;

    // A couple of registered indicators so the catalog path is exercised.
    shell.catalog_init(16);
    shell.register_item(ItemSpec {
        id: ItemId(0),
        alignment: Alignment::Start,
        distance: EdgeDistance::Close,
        icon: ICON_MAIL,
        needs_link: true,
    });
    shell.register_item(ItemSpec {
        id: ItemId(1),
        alignment: Alignment::End,
        distance: EdgeDistance::Medium,
        icon: ICON_NOTE,
        needs_link: false,
    });
    shell.load_item_icon(ItemId(0))?;
    shell.load_item_icon(ItemId(1))?;
    shell.set_item_text(ItemId(0), Some("3"));

    shell.open_window(false, WindowHooks::default());
    if let Some(window) = shell.window() {
        let strip = window.strip_rect(shell.metrics());
        let body = window.body_rect(shell.metrics());
        info!(?strip, ?body, "window surfaces ready");
    }
    repaint(&mut shell);

    let mut events = spawn_monitor(
        MONITOR_INTERVAL_MS,
        SystemClock::new(twelve_hour),
        SysfsBattery::new(),
        SysfsLink::new(),
    );
    let mut config_changes = strip_config::watch(&config_path);

    loop {
        tokio::select! {
            Some(event) = events.recv() => {
                shell.handle_event(&event);
                repaint(&mut shell);
            }
            Some(()) = config_changes.recv() => {
                match strip_config::load(&config_path) {
                    Ok(new_config) => {
                        shell.reload_config(&new_config);
                        info!("config reloaded");
                        repaint(&mut shell);
                    }
                    Err(e) => warn!("config reload failed: {e}"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    shell.close_window();
    Ok(())
}

/// Paint only when the layout was actually discarded since the last frame.
fn repaint(shell: &mut Shell) {
    let dirty = shell.window().is_some_and(|w| !w.has_layout());
    if !dirty {
        return;
    }

    let mut framebuffer = FrameBuffer::new(
        shell.metrics().strip_width,
        shell.metrics().strip_height,
    );
    if shell.paint(&mut framebuffer) {
        info!("strip repainted:\n{}", framebuffer.to_ascii());
    }
}
