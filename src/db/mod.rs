pub mod item;
pub mod item_store;
