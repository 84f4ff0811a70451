use parking_lot::RwLock;
use tracing::info;

use crate::types::item::Item;

/// Process-wide owner of every item record.
///
/// Created once at start-up and handed to the app through `web::Data`. Each
/// operation runs inside a single lock acquisition, so a lookup and the
/// mutation that follows it can't interleave with another request.
#[derive(Default)]
pub struct ItemStore {
    pub(crate) items: RwLock<Vec<Item>>,
}

impl ItemStore {
    pub fn new() -> Self {
        info!("Initializing in-memory item store.");
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        info!("Initializing in-memory item store with {} items.", items.len());
        Self {
            items: RwLock::new(items),
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}
