use crate::gfx::{Alignment, Bitmap};
use crate::services::{IconId, IconStore};
use crate::Result;
use std::rc::Rc;

/// Ordinal priority class: lower values sort closer to the strip's outer
/// edge and win space first within a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EdgeDistance {
    SystemIcon,
    SystemText,
    Close,
    Medium,
    Far,
}

/// Dense numeric id of a registered item; unique and stable for the item's
/// lifetime, used for O(1) catalog lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub u32);

/// Everything needed to register a status item.
#[derive(Debug, Clone, Copy)]
pub struct ItemSpec {
    pub id: ItemId,
    pub alignment: Alignment,
    pub distance: EdgeDistance,
    pub icon: IconId,
    /// Only show this item while connectivity is up.
    pub needs_link: bool,
}

/// A persistently registered status indicator, owned by the [`Catalog`].
///
/// The icon is loaded lazily and lives independently of registration: an
/// item with no loaded icon is registered but invisible.  Text is owned by
/// the item (a private copy), so no caller buffer lifetime leaks into the
/// API.
///
/// [`Catalog`]: crate::catalog::Catalog
#[derive(Debug)]
pub struct Item {
    alignment: Alignment,
    distance: EdgeDistance,
    id: ItemId,
    icon_resource: IconId,
    needs_link: bool,
    icon: Option<Rc<Bitmap>>,
    text: Option<String>,
}

impl Item {
    #[must_use]
    pub fn new(spec: ItemSpec) -> Self {
        Self {
            alignment: spec.alignment,
            distance: spec.distance,
            id: spec.id,
            icon_resource: spec.icon,
            needs_link: spec.needs_link,
            icon: None,
            text: None,
        }
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn distance(&self) -> EdgeDistance {
        self.distance
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn needs_link(&self) -> bool {
        self.needs_link
    }

    pub fn icon(&self) -> Option<&Rc<Bitmap>> {
        self.icon.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replaces the item's text.  Returns `true` when the visible state
    /// changed: the text actually differs and the item is currently shown
    /// (icon loaded).
    pub fn set_text(&mut self, text: Option<&str>) -> bool {
        if self.text.as_deref() == text {
            return false;
        }
        self.text = text.map(str::to_owned);
        self.icon.is_some()
    }

    /// Loads the icon from the item's current resource id.  No-op when
    /// already loaded.
    pub fn load_icon(&mut self, store: &dyn IconStore) -> Result<bool> {
        if self.icon.is_some() {
            return Ok(false);
        }
        self.icon = Some(store.load(self.icon_resource)?);
        Ok(true)
    }

    /// Switches to a new icon resource and reloads.  No-op when the
    /// resource id is unchanged and the icon is already loaded.
    pub fn load_new_icon(&mut self, resource: IconId, store: &dyn IconStore) -> Result<bool> {
        if self.icon_resource == resource && self.icon.is_some() {
            return Ok(false);
        }
        // Load before mutating so a store failure leaves the item untouched.
        let bitmap = store.load(resource)?;
        self.icon_resource = resource;
        self.icon = Some(bitmap);
        Ok(true)
    }

    /// Releases the loaded icon, hiding the item.  No-op when not loaded.
    pub fn unload_icon(&mut self) -> bool {
        if self.icon.is_none() {
            return false;
        }
        self.icon = None;
        true
    }
}
