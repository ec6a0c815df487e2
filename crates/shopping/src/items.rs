use std::collections::BTreeMap;

use serde::Serialize;

/// Display-ready grocery list: ingredient name to a positive quantity,
/// ordered by name. Detached from the aggregator that produced it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroceryItems(BTreeMap<String, u32>);

impl GroceryItems {
    pub(crate) fn new(items: BTreeMap<String, u32>) -> Self {
        Self(items)
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, quantity)| (name.as_str(), *quantity))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn display_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(name, quantity)| display_line(name, quantity))
            .collect()
    }

    pub fn into_inner(self) -> BTreeMap<String, u32> {
        self.0
    }
}

impl IntoIterator for GroceryItems {
    type Item = (String, u32);
    type IntoIter = std::collections::btree_map::IntoIter<String, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// `"Milk"` for a single unit, `"Milk x3"` otherwise.
pub fn display_line(name: &str, quantity: u32) -> String {
    if quantity == 1 {
        name.to_owned()
    } else {
        format!("{name} x{quantity}")
    }
}
