use std::collections::BTreeMap;

use weekcart_shared::{DaySnapshot, MealSlot, RecipeRef};

/// One day of the week plan: at most one recipe per meal slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DailyPlan {
    by_slot: BTreeMap<MealSlot, RecipeRef>,
}

impl DailyPlan {
    pub fn get(&self, slot: MealSlot) -> Option<&RecipeRef> {
        self.by_slot.get(&slot)
    }

    /// Set or replace the slot; `None` empties it.
    pub fn set(&mut self, slot: MealSlot, recipe: Option<RecipeRef>) {
        match recipe {
            Some(recipe) => {
                self.by_slot.insert(slot, recipe);
            }
            None => {
                self.by_slot.remove(&slot);
            }
        }
    }

    pub fn clear(&mut self, slot: MealSlot) -> Option<RecipeRef> {
        self.by_slot.remove(&slot)
    }

    pub(crate) fn slots_mut(&mut self) -> impl Iterator<Item = &mut RecipeRef> {
        self.by_slot.values_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slot.is_empty()
    }

    pub fn snapshot(&self) -> DaySnapshot {
        self.by_slot
            .iter()
            .map(|(slot, recipe)| (*slot, recipe.clone()))
            .collect()
    }
}
