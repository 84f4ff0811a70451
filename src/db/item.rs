use tracing::debug;

use crate::db::item_store::ItemStore;
use crate::types::error::StoreError;
use crate::types::item::{Item, UpdateItem};

impl ItemStore {
    pub fn list(&self) -> Vec<Item> {
        self.items.read().clone()
    }

    /// First item whose name matches exactly. Duplicate names are allowed, so
    /// later entries with the same name are shadowed.
    pub fn find_by_name(&self, name: &str) -> Result<Item, StoreError> {
        self.items
            .read()
            .iter()
            .find(|item| item.name == name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    pub fn create(&self, item: Item) -> Item {
        debug!("Appending item {}", item.name);
        self.items.write().push(item.clone());
        item
    }

    pub fn update(&self, name: &str, patch: UpdateItem) -> Result<Item, StoreError> {
        let mut items = self.items.write();

        let item = items
            .iter_mut()
            .find(|item| item.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        item.merge(patch);
        debug!("Updated item {} (now {})", name, item.name);

        Ok(item.clone())
    }

    pub fn remove(&self, name: &str) -> Result<(), StoreError> {
        let mut items = self.items.write();

        let idx = items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        // Vec::remove shifts the tail, keeping insertion order.
        items.remove(idx);
        debug!("Removed item {}", name);

        Ok(())
    }
}
