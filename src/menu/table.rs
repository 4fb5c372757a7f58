use std::collections::HashSet;

use log::warn;

use crate::models::MenuItem;

/// Ordered menu, unique by item name.
#[derive(Debug, Clone, Default)]
pub struct MenuTable {
    items: Vec<MenuItem>,
}

impl MenuTable {
    /// Create a table from a list of items.
    ///
    /// Keeps the first occurrence of each name; later duplicates are dropped.
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(items.len());
        for item in items {
            if seen.insert(item.name.clone()) {
                kept.push(item);
            } else {
                warn!("Dropping duplicate menu item '{}'", item.name);
            }
        }
        Self { items: kept }
    }

    /// Get an item by exact name.
    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    /// Keep only items matching the predicate, preserving order.
    pub fn retain<F: FnMut(&MenuItem) -> bool>(&mut self, f: F) {
        self.items.retain(f);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_keep_first() {
        let mut second = MenuItem::zeroed("Taco");
        second.calories = 999.0;
        let mut first = MenuItem::zeroed("Taco");
        first.calories = 170.0;

        let table = MenuTable::new(vec![first, MenuItem::zeroed("Nachos"), second]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Taco").unwrap().calories, 170.0);
        assert_eq!(table.names(), vec!["Taco", "Nachos"]);
    }

    #[test]
    fn test_retain_preserves_order() {
        let mut table = MenuTable::new(vec![
            MenuItem::zeroed("A"),
            MenuItem::zeroed("B"),
            MenuItem::zeroed("C"),
        ]);
        table.retain(|item| item.name != "B");
        assert_eq!(table.names(), vec!["A", "C"]);
    }
}
