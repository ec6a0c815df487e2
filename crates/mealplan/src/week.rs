use std::sync::Arc;

use time::Weekday;
use weekcart_shared::{MealPlanObserver, MealSlot, RecipeRef, WeekSnapshot};

use crate::{ActiveSlots, DailyPlan, ObserverId, ObserverRegistry, Result};

/// In-memory week plan (Monday to Sunday) and the subject observers watch.
///
/// Every mutating call bumps the revision, builds one fresh [`WeekSnapshot`]
/// and pushes it synchronously to every registered observer, in registration
/// order. There is no batching: the caller's stack runs the observers.
///
/// Observers must not mutate the plan from inside their callback.
#[derive(Debug, Default)]
pub struct WeekPlan {
    days: [DailyPlan; 7],
    active_slots: ActiveSlots,
    revision: u64,
    observers: ObserverRegistry,
}

impl WeekPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active_slots(active_slots: ActiveSlots) -> Self {
        Self {
            active_slots,
            ..Self::default()
        }
    }

    /// Register an observer and immediately hand it the current state.
    pub fn add_observer(&mut self, observer: Arc<dyn MealPlanObserver>) -> ObserverId {
        let id = self.observers.register(observer.clone());
        observer.on_plan_changed(&self.snapshot());

        tracing::debug!(?id, "meal plan observer added");

        id
    }

    /// Unregister an observer. Does not notify anyone.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    pub fn active_slots(&self) -> &ActiveSlots {
        &self.active_slots
    }

    /// Replace the active slots. An empty set is rejected before anything
    /// changes.
    pub fn set_active_slots(&mut self, slots: impl IntoIterator<Item = MealSlot>) -> Result<()> {
        let slots = ActiveSlots::new(slots)?;

        tracing::info!(slots = ?slots.iter().collect::<Vec<_>>(), "active meal slots changed");

        self.active_slots = slots;
        self.changed();

        Ok(())
    }

    pub fn day(&self, day: Weekday) -> &DailyPlan {
        &self.days[day.number_days_from_monday() as usize]
    }

    fn day_mut(&mut self, day: Weekday) -> &mut DailyPlan {
        &mut self.days[day.number_days_from_monday() as usize]
    }

    pub fn recipe(&self, day: Weekday, slot: MealSlot) -> Option<&RecipeRef> {
        self.day(day).get(slot)
    }

    /// Assign (or overwrite) one cell. `None` leaves the cell empty.
    pub fn set_recipe(&mut self, day: Weekday, slot: MealSlot, recipe: Option<RecipeRef>) {
        tracing::debug!(%day, %slot, recipe = ?recipe, "set recipe");

        self.day_mut(day).set(slot, recipe);
        self.changed();
    }

    /// Empty one cell. Notifies even when the cell was already empty so
    /// downstream observers can be forced to refresh.
    pub fn clear(&mut self, day: Weekday, slot: MealSlot) {
        let previous = self.day_mut(day).clear(slot);

        tracing::debug!(%day, %slot, previous = ?previous, "clear recipe");

        self.changed();
    }

    /// Point every cell holding `old` at `new`. Observers hear about it once,
    /// and only when at least one cell changed.
    pub fn replace_recipe_references(&mut self, old: &RecipeRef, new: &RecipeRef) -> bool {
        if old == new {
            return false;
        }

        let mut replaced = 0usize;
        for day in self.days.iter_mut() {
            for recipe in day.slots_mut() {
                if *recipe == *old {
                    *recipe = new.clone();
                    replaced += 1;
                }
            }
        }

        if replaced == 0 {
            return false;
        }

        tracing::debug!(%old, %new, replaced, "recipe references replaced");

        self.changed();

        true
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Detached copy of every day, independent of the live plan.
    pub fn snapshot(&self) -> WeekSnapshot {
        WeekSnapshot::new(self.revision, self.days.each_ref().map(DailyPlan::snapshot))
    }

    fn changed(&mut self) {
        self.revision += 1;
        let snapshot = self.snapshot();
        self.observers.notify(&snapshot);
    }
}
