// 📋 Inventory Record - Immutable logged item
// Serialized as-is into the JSON snapshot

use crate::repository::Entity;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub date_added: NaiveDateTime,
}

impl InventoryItem {
    pub fn new(id: i64, name: &str, quantity: i64, date_added: NaiveDateTime) -> Self {
        InventoryItem {
            id,
            name: name.to_string(),
            quantity,
            date_added,
        }
    }
}

impl Entity for InventoryItem {
    fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Qty: {}, Added: {}",
            self.id,
            self.name,
            self.quantity,
            self.date_added.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_inventory_item_display() {
        let added = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let item = InventoryItem::new(1, "Laptop", 10, added);

        assert_eq!(
            item.to_string(),
            "ID: 1, Name: Laptop, Qty: 10, Added: 2025-06-01 09:30:00"
        );
    }
}
