use std::any::Any;
use strip_core::Rect;
use strip_layout::{Layout, Metrics};

/// Caller lifecycle hooks, invoked after the shell's own handling on the
/// way in (load/appear) and before it on the way out (disappear/unload).
/// Closures capture whatever context the caller needs.
#[derive(Default)]
pub struct WindowHooks {
    pub load: Option<Box<dyn FnMut()>>,
    pub unload: Option<Box<dyn FnMut()>>,
    pub appear: Option<Box<dyn FnMut()>>,
    pub disappear: Option<Box<dyn FnMut()>>,
}

/// One strip window: a status-strip sub-surface above a caller-owned body
/// sub-surface, plus the cached layout for the strip.
///
/// Layout validity is binary.  `invalidate` discards the whole cached
/// arrangement; the shell's paint path rebuilds it on demand, so no
/// partially built state is ever observable.
pub struct StripWindow {
    hide_clock: bool,
    layout: Option<Layout>,
    hooks: WindowHooks,
    user_data: Option<Box<dyn Any>>,
}

impl StripWindow {
    pub(crate) fn new(hide_clock: bool, hooks: WindowHooks) -> Self {
        Self {
            hide_clock,
            layout: None,
            hooks,
            user_data: None,
        }
    }

    pub fn hide_clock(&self) -> bool {
        self.hide_clock
    }

    /// The strip sub-surface, at the top of the window.
    pub fn strip_rect(&self, metrics: &Metrics) -> Rect {
        Rect::new(0, 0, metrics.strip_width, metrics.strip_height)
    }

    /// The body sub-surface: everything below the strip.
    pub fn body_rect(&self, metrics: &Metrics) -> Rect {
        Rect::new(
            0,
            metrics.strip_height,
            metrics.strip_width,
            metrics.window_height - metrics.strip_height,
        )
    }

    /// Discards the cached layout.  No-op when already absent.
    pub fn invalidate(&mut self) {
        self.layout = None;
    }

    pub fn has_layout(&self) -> bool {
        self.layout.is_some()
    }

    pub(crate) fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub(crate) fn set_layout(&mut self, layout: Layout) {
        self.layout = Some(layout);
    }

    // ── Opaque per-window caller data ────────────────────────────────────

    pub fn set_user_data(&mut self, data: Box<dyn Any>) {
        self.user_data = Some(data);
    }

    pub fn user_data(&self) -> Option<&dyn Any> {
        self.user_data.as_deref()
    }

    pub fn user_data_mut(&mut self) -> Option<&mut dyn Any> {
        self.user_data.as_deref_mut()
    }

    // ── Hook dispatch ────────────────────────────────────────────────────

    pub(crate) fn run_load(&mut self) {
        if let Some(hook) = &mut self.hooks.load {
            hook();
        }
    }

    pub(crate) fn run_unload(&mut self) {
        if let Some(hook) = &mut self.hooks.unload {
            hook();
        }
    }

    pub(crate) fn run_appear(&mut self) {
        if let Some(hook) = &mut self.hooks.appear {
            hook();
        }
    }

    pub(crate) fn run_disappear(&mut self) {
        if let Some(hook) = &mut self.hooks.disappear {
            hook();
        }
    }
}
