use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored shopping list entry.
///
/// `price` is kept exactly as the client sent it. Any fields beyond `name`
/// and `price` are carried in `extra` and serialized flat next to them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub price: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            name: name.into(),
            price: price.into(),
            extra: Map::new(),
        }
    }

    /// Overwrites the fields present in `patch`, leaving the rest untouched.
    pub fn merge(&mut self, patch: UpdateItem) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        self.extra.extend(patch.extra);
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CreateItem {
    pub name: Option<String>,
    pub price: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateItem {
    /// Returns the item to store, or the names of the required fields that
    /// are missing or empty.
    pub fn into_item(self) -> Result<Item, Vec<&'static str>> {
        let name = self.name.filter(|v| !v.is_empty());
        let price = self.price.filter(|v| !v.is_empty());

        match (name, price) {
            (Some(name), Some(price)) => Ok(Item {
                name,
                price,
                extra: self.extra,
            }),
            (name, price) => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push("name");
                }
                if price.is_none() {
                    missing.push("price");
                }
                Err(missing)
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub price: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ItemRes {
    pub item: Item,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ItemListRes {
    pub items: Vec<Item>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageRes {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extra_fields_round_trip_flat() {
        let item: Item =
            serde_json::from_value(json!({"name": "gum", "price": "1.00", "aisle": 4})).unwrap();
        assert_eq!(item.extra.get("aisle"), Some(&json!(4)));
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"name": "gum", "price": "1.00", "aisle": 4})
        );
    }

    #[test]
    fn create_requires_non_empty_name_and_price() {
        let missing = CreateItem {
            name: Some(String::new()),
            ..Default::default()
        }
        .into_item()
        .unwrap_err();
        assert_eq!(missing, vec!["name", "price"]);

        let item = CreateItem {
            name: Some("gum".into()),
            price: Some("1.00".into()),
            ..Default::default()
        }
        .into_item()
        .unwrap();
        assert_eq!(item, Item::new("gum", "1.00"));
    }

    #[test]
    fn merge_keeps_absent_fields() {
        let mut item = Item::new("pickles", "3.00");
        item.merge(UpdateItem {
            name: Some("Troll".into()),
            ..Default::default()
        });
        assert_eq!(item, Item::new("Troll", "3.00"));
    }
}
