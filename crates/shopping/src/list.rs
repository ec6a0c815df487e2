use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use weekcart_shared::{IngredientResolver, MealPlanObserver, WeekSnapshot};

use crate::{GroceryAggregator, GroceryItems};

/// Shared handle to one [`GroceryAggregator`].
///
/// Clones point at the same state. Every call takes the aggregator lock, so a
/// snapshot recompute and a concurrent [`GroceryList::items`] never interleave.
#[derive(Clone, Debug, Default)]
pub struct GroceryList {
    inner: Arc<Mutex<GroceryAggregator>>,
}

impl GroceryList {
    pub fn new(resolver: impl IngredientResolver + 'static) -> Self {
        Self::from_aggregator(GroceryAggregator::new(resolver))
    }

    pub fn from_aggregator(aggregator: GroceryAggregator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(aggregator)),
        }
    }

    pub fn set_resolver(&self, resolver: Arc<dyn IngredientResolver>) {
        self.lock().set_resolver(resolver);
    }

    pub fn items(&self) -> GroceryItems {
        self.lock().items()
    }

    pub fn display_lines(&self) -> Vec<String> {
        self.lock().display_lines()
    }

    pub fn add_manual_item(&self, name: &str, quantity: u32) {
        self.lock().add_manual_item(name, quantity);
    }

    pub fn remove_items<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lock().remove_items(names);
    }

    pub fn dismiss_items<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lock().dismiss_items(names);
    }

    pub fn set_baseline_to_current_auto(&self) {
        self.lock().set_baseline_to_current_auto();
    }

    /// Run a read against the aggregator under its lock.
    pub fn inspect<R>(&self, f: impl FnOnce(&GroceryAggregator) -> R) -> R {
        f(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, GroceryAggregator> {
        // Every mutation either replaces a whole ledger or updates a single
        // entry, so the state behind a poisoned lock is still consistent.
        self.inner.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            tracing::warn!("grocery list lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl MealPlanObserver for GroceryList {
    fn on_plan_changed(&self, snapshot: &WeekSnapshot) {
        self.lock().on_plan_changed(snapshot);
    }
}
