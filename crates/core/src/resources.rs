use crate::gfx::Bitmap;
use crate::services::{FontId, IconId, IconStore};
use crate::Result;
use std::rc::Rc;

/// Resource keys for the strip's built-in icons and fonts.
#[derive(Debug, Clone, Copy)]
pub struct ResourceIds {
    pub icon_link: IconId,
    pub icon_battery: IconId,
    /// Charging bolt, sized to the battery icon's interior; its bounds also
    /// define the discharge gauge's fill area.
    pub icon_charging: IconId,
    pub icon_charging_half: IconId,
    pub font_bold: FontId,
    pub font_small: FontId,
}

impl Default for ResourceIds {
    fn default() -> Self {
        Self {
            icon_link: IconId(1),
            icon_battery: IconId(2),
            icon_charging: IconId(3),
            icon_charging_half: IconId(4),
            font_bold: FontId(1),
            font_small: FontId(2),
        }
    }
}

/// System icons and fonts, loaded once per shell and shared by every
/// layout rebuild.
#[derive(Debug, Clone)]
pub struct SystemResources {
    pub icon_link: Rc<Bitmap>,
    pub icon_battery: Rc<Bitmap>,
    pub icon_charging: Rc<Bitmap>,
    pub icon_charging_half: Rc<Bitmap>,
    pub font_bold: FontId,
    pub font_small: FontId,
}

impl SystemResources {
    pub fn load(store: &dyn IconStore, ids: &ResourceIds) -> Result<Self> {
        Ok(Self {
            icon_link: store.load(ids.icon_link)?,
            icon_battery: store.load(ids.icon_battery)?,
            icon_charging: store.load(ids.icon_charging)?,
            icon_charging_half: store.load(ids.icon_charging_half)?,
            font_bold: ids.font_bold,
            font_small: ids.font_small,
        })
    }
}
