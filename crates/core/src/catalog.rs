use crate::item::{Item, ItemId};
use crate::services::{IconId, IconStore};
use crate::Result;

/// Append-ordered registry of status items.
///
/// Registration order is the priority chain: earlier items get layout space
/// first.  A dense id table gives O(1) lookup by [`ItemId`].  The catalog
/// outlives any single layout; builders only read it.
///
/// The catalog starts uninitialized.  Until [`Catalog::init`] fixes the
/// id-space size, inserts discard their item and lookups report not-found.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Registration order; the index of each item is recorded in `id_table`.
    items: Vec<Item>,
    id_table: Vec<Option<usize>>,
    initialized: bool,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the id-space size.  Repeat calls are no-ops.
    pub fn init(&mut self, id_count: usize) {
        if self.initialized {
            return;
        }
        self.id_table = vec![None; id_count];
        self.initialized = true;
    }

    /// Destroys every item (releasing loaded icons) and returns to the
    /// uninitialized state.  No-op when not initialized.
    pub fn deinit(&mut self) {
        if !self.initialized {
            return;
        }
        self.items.clear();
        self.id_table.clear();
        self.initialized = false;
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `item` at the tail of the priority chain and records it in
    /// the id table.  Returns `false` — dropping the item — when the
    /// catalog is uninitialized, the id falls outside the id space, or the
    /// id is already registered.
    pub fn insert(&mut self, item: Item) -> bool {
        if !self.initialized {
            tracing::debug!("catalog not initialized; discarding item {}", item.id().0);
            return false;
        }
        match self.id_table.get(item.id().0 as usize) {
            Some(None) => {}
            Some(Some(_)) => {
                tracing::warn!("item id {} already registered", item.id().0);
                return false;
            }
            None => {
                tracing::warn!("item id {} outside the id space", item.id().0);
                return false;
            }
        }
        self.id_table[item.id().0 as usize] = Some(self.items.len());
        self.items.push(item);
        true
    }

    /// O(1) lookup.  `None` for an uninitialized catalog or an unset id.
    #[must_use]
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        let slot = *self.id_table.get(id.0 as usize)?;
        slot.map(|index| &self.items[index])
    }

    fn find_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        let slot = *self.id_table.get(id.0 as usize)?;
        slot.map(|index| &mut self.items[index])
    }

    /// Lazy, restartable iteration in priority (registration) order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    // ── Per-item mutations, routed by id ─────────────────────────────────
    // Each returns whether the visible state changed, so the owning shell
    // can invalidate its layout exactly when needed.  Unknown ids are
    // no-ops.

    pub fn set_text(&mut self, id: ItemId, text: Option<&str>) -> bool {
        self.find_mut(id).is_some_and(|item| item.set_text(text))
    }

    pub fn load_icon(&mut self, id: ItemId, store: &dyn IconStore) -> Result<bool> {
        match self.find_mut(id) {
            Some(item) => item.load_icon(store),
            None => Ok(false),
        }
    }

    pub fn load_new_icon(
        &mut self,
        id: ItemId,
        resource: IconId,
        store: &dyn IconStore,
    ) -> Result<bool> {
        match self.find_mut(id) {
            Some(item) => item.load_new_icon(resource, store),
            None => Ok(false),
        }
    }

    pub fn unload_icon(&mut self, id: ItemId) -> bool {
        self.find_mut(id).is_some_and(Item::unload_icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{Alignment, Bitmap};
    use crate::item::{EdgeDistance, ItemSpec};
    use std::rc::Rc;

    struct FakeStore;

    impl IconStore for FakeStore {
        fn load(&self, id: IconId) -> Result<Rc<Bitmap>> {
            Ok(Rc::new(Bitmap::new(id.0 as i32, 8)))
        }
    }

    fn spec(id: u32) -> ItemSpec {
        ItemSpec {
            id: ItemId(id),
            alignment: Alignment::Start,
            distance: EdgeDistance::Close,
            icon: IconId(10),
            needs_link: false,
        }
    }

    #[test]
    fn insert_before_init_discards_item() {
        let mut catalog = Catalog::new();
        assert!(!catalog.insert(Item::new(spec(0))));
        assert!(catalog.find(ItemId(0)).is_none());

        catalog.init(4);
        assert!(catalog.is_empty());
    }

    #[test]
    fn find_on_uninitialized_catalog_is_none() {
        let catalog = Catalog::new();
        assert!(catalog.find(ItemId(0)).is_none());
    }

    #[test]
    fn init_is_idempotent() {
        let mut catalog = Catalog::new();
        catalog.init(2);
        assert!(catalog.insert(Item::new(spec(1))));
        catalog.init(16); // no-op: id space stays at 2
        assert!(!catalog.insert(Item::new(spec(7))));
        assert!(catalog.find(ItemId(1)).is_some());
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let mut catalog = Catalog::new();
        catalog.init(8);
        for id in [3, 0, 5] {
            catalog.insert(Item::new(spec(id)));
        }
        let order: Vec<u32> = catalog.iter().map(|item| item.id().0).collect();
        assert_eq!(order, vec![3, 0, 5]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut catalog = Catalog::new();
        catalog.init(4);
        assert!(catalog.insert(Item::new(spec(2))));
        assert!(!catalog.insert(Item::new(spec(2))));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn out_of_range_id_is_rejected() {
        let mut catalog = Catalog::new();
        catalog.init(4);
        assert!(!catalog.insert(Item::new(spec(4))));
        assert!(catalog.find(ItemId(4)).is_none());
    }

    #[test]
    fn deinit_releases_items_and_uninitializes() {
        let mut catalog = Catalog::new();
        catalog.init(4);
        catalog.insert(Item::new(spec(1)));
        catalog.load_icon(ItemId(1), &FakeStore).unwrap();

        catalog.deinit();
        assert!(!catalog.initialized());
        assert!(catalog.find(ItemId(1)).is_none());
        assert!(!catalog.insert(Item::new(spec(1))));
    }

    #[test]
    fn mutations_on_unknown_id_are_noops() {
        let mut catalog = Catalog::new();
        catalog.init(4);
        assert!(!catalog.set_text(ItemId(3), Some("x")));
        assert!(!catalog.load_icon(ItemId(3), &FakeStore).unwrap());
        assert!(!catalog.unload_icon(ItemId(3)));
    }
}
