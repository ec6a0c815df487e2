use std::sync::{Arc, Mutex, MutexGuard};

use time::Weekday;
use weekcart_mealplan::{ActiveSlots, ObserverId, WeekPlan};
use weekcart_shared::{IngredientResolver, MealPlanObserver, MealSlot, RecipeRef, WeekSnapshot};
use weekcart_shopping::{GroceryItems, GroceryList};

use crate::config::PlannerConfig;
use crate::error::Result;

/// One week plan wired to one grocery list.
///
/// The kitchen is built explicitly and passed to whoever needs it. Every plan
/// mutation and every grocery read or write goes through the same lock, so
/// a `set_recipe` on one thread and `items` on another never see a half
/// applied change.
///
/// Observers added here run while that lock is held and must not call back
/// into the kitchen.
#[derive(Debug)]
pub struct Kitchen {
    plan: Mutex<WeekPlan>,
    grocery: GroceryList,
}

impl Kitchen {
    pub fn new(resolver: impl IngredientResolver + 'static) -> Self {
        Self::with_parts(WeekPlan::new(), GroceryList::new(resolver))
    }

    pub fn from_config(
        config: &PlannerConfig,
        resolver: impl IngredientResolver + 'static,
    ) -> Result<Self> {
        let active_slots = config.active_slots()?;

        Ok(Self::with_parts(
            WeekPlan::with_active_slots(active_slots),
            GroceryList::new(resolver),
        ))
    }

    /// Register `grocery` on `plan`; it receives the current state at once.
    pub fn with_parts(mut plan: WeekPlan, grocery: GroceryList) -> Self {
        plan.add_observer(Arc::new(grocery.clone()));

        Self {
            plan: Mutex::new(plan),
            grocery,
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn set_recipe(&self, day: Weekday, slot: MealSlot, recipe: Option<RecipeRef>) {
        self.plan().set_recipe(day, slot, recipe);
    }

    #[tracing::instrument(skip(self))]
    pub fn clear(&self, day: Weekday, slot: MealSlot) {
        self.plan().clear(day, slot);
    }

    #[tracing::instrument(skip(self, slots))]
    pub fn set_active_slots(&self, slots: impl IntoIterator<Item = MealSlot>) -> Result<()> {
        self.plan().set_active_slots(slots)?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn replace_recipe_references(&self, old: &RecipeRef, new: &RecipeRef) -> bool {
        self.plan().replace_recipe_references(old, new)
    }

    pub fn add_observer(&self, observer: Arc<dyn MealPlanObserver>) -> ObserverId {
        self.plan().add_observer(observer)
    }

    pub fn remove_observer(&self, id: ObserverId) -> bool {
        self.plan().remove_observer(id)
    }

    pub fn active_slots(&self) -> ActiveSlots {
        self.plan().active_slots().clone()
    }

    pub fn recipe(&self, day: Weekday, slot: MealSlot) -> Option<RecipeRef> {
        self.plan().recipe(day, slot).cloned()
    }

    pub fn snapshot(&self) -> WeekSnapshot {
        self.plan().snapshot()
    }

    pub fn items(&self) -> GroceryItems {
        let _plan = self.plan();
        self.grocery.items()
    }

    pub fn display_lines(&self) -> Vec<String> {
        let _plan = self.plan();
        self.grocery.display_lines()
    }

    pub fn add_manual_item(&self, name: &str, quantity: u32) {
        let _plan = self.plan();
        self.grocery.add_manual_item(name, quantity);
    }

    pub fn remove_items<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let _plan = self.plan();
        self.grocery.remove_items(names);
    }

    pub fn dismiss_items<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let _plan = self.plan();
        self.grocery.dismiss_items(names);
    }

    pub fn set_baseline_to_current_auto(&self) {
        let _plan = self.plan();
        self.grocery.set_baseline_to_current_auto();
    }

    fn plan(&self) -> MutexGuard<'_, WeekPlan> {
        self.plan.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("week plan lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cereal(id: &RecipeRef) -> Option<Vec<String>> {
        (id.as_str() == "cereal").then(|| vec!["Milk".to_owned(), "Oats".to_owned()])
    }

    #[test]
    fn test_kitchen_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Kitchen>();
    }

    #[test]
    fn test_from_config_applies_active_slots() {
        let config = PlannerConfig {
            active_slots: vec!["lunch".to_owned(), "dinner".to_owned()],
        };

        let kitchen = Kitchen::from_config(&config, cereal).unwrap();

        let slots = kitchen.active_slots();
        assert_eq!(slots.iter().collect::<Vec<_>>(), [MealSlot::Lunch, MealSlot::Dinner]);
    }

    #[test]
    fn test_from_config_rejects_empty_slots() {
        let config = PlannerConfig {
            active_slots: vec![],
        };

        assert!(Kitchen::from_config(&config, cereal).is_err());
    }

    #[test]
    fn test_grocery_follows_plan() {
        let kitchen = Kitchen::new(cereal);

        kitchen.set_recipe(Weekday::Monday, MealSlot::Breakfast, Some("cereal".into()));
        kitchen.set_recipe(Weekday::Tuesday, MealSlot::Breakfast, Some("cereal".into()));

        assert_eq!(kitchen.display_lines(), ["Milk x2", "Oats x2"]);
        assert_eq!(kitchen.grocery.items(), kitchen.items());
    }
}
