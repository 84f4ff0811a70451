use actix_web::web;
use shopping_list::db::item_store::ItemStore;
use shopping_list::types::item::Item;

pub mod client;

pub struct TestContext {
    pub store: web::Data<ItemStore>,
}

impl TestContext {
    /// Fresh store holding just the pickles fixture.
    #[allow(dead_code)]
    pub fn new() -> TestContext {
        TestContext {
            store: web::Data::new(ItemStore::with_items(vec![test_data::pickles()])),
        }
    }

    #[allow(dead_code)]
    pub fn empty() -> TestContext {
        TestContext {
            store: web::Data::new(ItemStore::new()),
        }
    }

    #[allow(dead_code)]
    pub fn with_items(items: Vec<Item>) -> TestContext {
        TestContext {
            store: web::Data::new(ItemStore::with_items(items)),
        }
    }
}

pub mod test_data {
    use shopping_list::types::item::Item;

    pub fn pickles() -> Item {
        Item::new("pickles", "3.00")
    }
}
