use crate::window::{StripWindow, WindowHooks};
use chrono::{DateTime, Local};
use strip_config::StripConfig;
use strip_core::{
    BatteryReading, BatterySource, Catalog, Clock, IconId, IconStore, Item, ItemId, ItemSpec,
    LinkSource, ResourceIds, Result, StatusEvent, StatusState, SystemResources,
};
use strip_layout::{build_layout, BuildContext, Metrics};
use strip_renderer::{render, Canvas};

/// The capabilities a shell consumes, bundled for construction.
pub struct Services {
    pub clock: Box<dyn Clock>,
    pub battery: Box<dyn BatterySource>,
    pub link: Box<dyn LinkSource>,
    pub icons: Box<dyn IconStore>,
}

/// Caller subscriptions, invoked after the shell's own event handling so
/// the strip's state is already in sync when they run.
#[derive(Default)]
pub struct Subscriptions {
    tick: Option<Box<dyn FnMut(&DateTime<Local>)>>,
    battery: Option<Box<dyn FnMut(BatteryReading)>>,
    link: Option<Box<dyn FnMut(bool)>>,
}

/// Explicit context owning everything the strip shares across rebuilds:
/// the item catalog, system resources, cached status, caller
/// subscriptions, and the single active window.
///
/// All methods run synchronously to completion; callbacks are never
/// reentrant with each other or with a build/paint pass.
pub struct Shell {
    metrics: Metrics,
    twelve_hour: bool,
    services: Services,
    resources: SystemResources,
    catalog: Catalog,
    status: StatusState,
    subs: Subscriptions,
    window: Option<StripWindow>,
    /// Minute stamp of the last clock update, so sub-minute ticks don't
    /// churn the layout.
    last_minute: Option<i64>,
}

impl Shell {
    pub fn new(config: &StripConfig, services: Services, ids: &ResourceIds) -> Result<Self> {
        let resources = SystemResources::load(services.icons.as_ref(), ids)?;
        let twelve_hour = config
            .clock
            .twelve_hour
            .unwrap_or_else(|| services.clock.twelve_hour());

        Ok(Self {
            metrics: Metrics::from_config(config),
            twelve_hour,
            services,
            resources,
            catalog: Catalog::new(),
            status: StatusState::default(),
            subs: Subscriptions::default(),
            window: None,
            last_minute: None,
        })
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn status(&self) -> &StatusState {
        &self.status
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn window(&self) -> Option<&StripWindow> {
        self.window.as_ref()
    }

    pub fn window_mut(&mut self) -> Option<&mut StripWindow> {
        self.window.as_mut()
    }

    /// Discards the active window's cached layout.  Defensive no-op when
    /// no window is active or the layout is already absent.
    pub fn invalidate(&mut self) {
        if let Some(window) = &mut self.window {
            window.invalidate();
        }
    }

    // ── Catalog surface ──────────────────────────────────────────────────

    /// Fixes the catalog's id-space size.  Repeat calls are no-ops.
    pub fn catalog_init(&mut self, id_count: usize) {
        self.catalog.init(id_count);
    }

    /// Destroys all registered items and uninitializes the catalog.
    pub fn catalog_deinit(&mut self) {
        self.catalog.deinit();
        self.invalidate();
    }

    /// Registers a new item at the tail of the priority chain.  `false`
    /// when the catalog rejects it (uninitialized, id out of range or
    /// taken).  Freshly registered items have no icon loaded and are not
    /// yet visible, so the layout stays valid.
    pub fn register_item(&mut self, spec: ItemSpec) -> bool {
        self.catalog.insert(Item::new(spec))
    }

    pub fn set_item_text(&mut self, id: ItemId, text: Option<&str>) -> bool {
        let changed = self.catalog.set_text(id, text);
        if changed {
            self.invalidate();
        }
        changed
    }

    pub fn load_item_icon(&mut self, id: ItemId) -> Result<bool> {
        let changed = self.catalog.load_icon(id, self.services.icons.as_ref())?;
        if changed {
            self.invalidate();
        }
        Ok(changed)
    }

    /// Replaces the item's icon resource, reloading only if the resource
    /// id actually changed (or the icon was unloaded).
    pub fn load_item_new_icon(&mut self, id: ItemId, resource: IconId) -> Result<bool> {
        let changed = self
            .catalog
            .load_new_icon(id, resource, self.services.icons.as_ref())?;
        if changed {
            self.invalidate();
        }
        Ok(changed)
    }

    pub fn unload_item_icon(&mut self, id: ItemId) -> bool {
        let changed = self.catalog.unload_icon(id);
        if changed {
            self.invalidate();
        }
        changed
    }

    // ── Window lifecycle ─────────────────────────────────────────────────

    /// Opens the strip window (replacing any active one) and primes the
    /// cached status from the capability getters, so the first paint has
    /// real data even before the first monitor event arrives.
    pub fn open_window(&mut self, hide_clock: bool, hooks: WindowHooks) {
        if self.window.is_some() {
            tracing::warn!("replacing the active strip window");
            self.close_window();
        }

        let mut window = StripWindow::new(hide_clock, hooks);
        window.run_load();
        self.window = Some(window);

        let now = self.services.clock.now();
        if !hide_clock {
            self.last_minute = Some(now.timestamp() / 60);
            self.status.apply_tick(&now, self.twelve_hour);
        }
        self.status.apply_battery(self.services.battery.read());
        self.status.apply_link(self.services.link.connected());
        self.invalidate();

        if let Some(window) = &mut self.window {
            window.run_appear();
        }
    }

    /// Tears the active window down: disappear hook, unload hook, layout
    /// discarded with the window.  No-op when none is active.
    pub fn close_window(&mut self) {
        if let Some(mut window) = self.window.take() {
            window.run_disappear();
            window.run_unload();
        }
    }

    // ── Subscriptions ────────────────────────────────────────────────────

    /// Subscribes a tick handler and invokes it immediately with the
    /// current time, mirroring the strip's own priming.
    pub fn subscribe_tick(&mut self, mut handler: impl FnMut(&DateTime<Local>) + 'static) {
        handler(&self.services.clock.now());
        self.subs.tick = Some(Box::new(handler));
    }

    pub fn unsubscribe_tick(&mut self) {
        self.subs.tick = None;
    }

    pub fn subscribe_battery(&mut self, handler: impl FnMut(BatteryReading) + 'static) {
        self.subs.battery = Some(Box::new(handler));
    }

    pub fn unsubscribe_battery(&mut self) {
        self.subs.battery = None;
    }

    pub fn subscribe_link(&mut self, handler: impl FnMut(bool) + 'static) {
        self.subs.link = Some(Box::new(handler));
    }

    pub fn unsubscribe_link(&mut self) {
        self.subs.link = None;
    }

    // ── Event dispatch ───────────────────────────────────────────────────

    /// Applies one event to the cached status, invalidates the layout when
    /// visible state changed, then forwards to the caller's subscription.
    pub fn handle_event(&mut self, event: &StatusEvent) {
        match event {
            StatusEvent::Tick(now) => self.handle_tick(now),
            StatusEvent::Battery(reading) => self.handle_battery(*reading),
            StatusEvent::Link(connected) => self.handle_link(*connected),
            // The caller reloads the file and calls `reload_config`.
            StatusEvent::ConfigReloaded => {}
        }
    }

    fn handle_tick(&mut self, now: &DateTime<Local>) {
        let clock_shown = self.window.as_ref().is_some_and(|w| !w.hide_clock());
        let minute = now.timestamp() / 60;

        if clock_shown && self.last_minute != Some(minute) {
            self.last_minute = Some(minute);
            self.status.apply_tick(now, self.twelve_hour);
            self.invalidate();
        }

        if let Some(hook) = &mut self.subs.tick {
            hook(now);
        }
    }

    fn handle_battery(&mut self, reading: BatteryReading) {
        self.status.apply_battery(reading);
        self.invalidate();

        if let Some(hook) = &mut self.subs.battery {
            hook(reading);
        }
    }

    fn handle_link(&mut self, connected: bool) {
        self.status.apply_link(connected);
        self.invalidate();

        if let Some(hook) = &mut self.subs.link {
            hook(connected);
        }
    }

    /// Re-derives metrics (and the clock mode, unless the config pins it)
    /// after a config reload, then invalidates.
    pub fn reload_config(&mut self, config: &StripConfig) {
        self.metrics = Metrics::from_config(config);
        self.twelve_hour = config
            .clock
            .twelve_hour
            .unwrap_or_else(|| self.services.clock.twelve_hour());
        self.invalidate();
    }

    // ── Paint path ───────────────────────────────────────────────────────

    /// Paints the strip, lazily rebuilding the layout if it is absent.
    /// Returns `false` when no window is active.
    pub fn paint<C: Canvas>(&mut self, canvas: &mut C) -> bool {
        let Some(window) = self.window.as_mut() else {
            tracing::debug!("paint requested with no active window");
            return false;
        };

        if window.layout().is_none() {
            let layout = build_layout(
                &BuildContext {
                    status: &self.status,
                    catalog: &self.catalog,
                    resources: &self.resources,
                    metrics: &self.metrics,
                    hide_clock: window.hide_clock(),
                    twelve_hour: self.twelve_hour,
                },
                canvas,
            );
            window.set_layout(layout);
        }

        if let Some(layout) = window.layout() {
            render(layout, canvas, &self.metrics, &self.resources);
        }
        true
    }
}
