use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use weekcart_shared::recipe::unresolved;
use weekcart_shared::{IngredientResolver, WeekSnapshot};

use crate::items::{GroceryItems, display_line};
use crate::normalize::normalize_ingredient;

/// Grocery list derived from the week plan.
///
/// Three ledgers are kept apart:
/// - `auto`: ingredient counts recomputed from scratch on every snapshot.
/// - `manual`: quantities the user typed in, untouched by plan changes.
/// - `dismissed`: per ingredient, how many auto units the user already has.
///   It only goes up on dismissal and is clamped down to what is planned.
///
/// Visible quantity is `manual + max(0, auto - dismissed)`.
pub struct GroceryAggregator {
    resolver: Arc<dyn IngredientResolver>,
    auto: BTreeMap<String, u32>,
    manual: BTreeMap<String, u32>,
    dismissed: BTreeMap<String, u32>,
}

impl GroceryAggregator {
    pub fn new(resolver: impl IngredientResolver + 'static) -> Self {
        Self::with_shared_resolver(Arc::new(resolver))
    }

    pub fn with_shared_resolver(resolver: Arc<dyn IngredientResolver>) -> Self {
        Self {
            resolver,
            auto: BTreeMap::new(),
            manual: BTreeMap::new(),
            dismissed: BTreeMap::new(),
        }
    }

    /// Swap the recipe lookup. Takes effect on the next snapshot.
    pub fn set_resolver(&mut self, resolver: Arc<dyn IngredientResolver>) {
        self.resolver = resolver;
    }

    /// Recompute auto counts from a full snapshot and reconcile baselines.
    pub fn on_plan_changed(&mut self, snapshot: &WeekSnapshot) {
        let mut next = BTreeMap::<String, u32>::new();

        for (day, slot, recipe) in snapshot.assignments() {
            let Some(lines) = self.resolver.resolve(recipe) else {
                tracing::debug!(%day, %slot, %recipe, "recipe not resolved, skipping");
                continue;
            };

            for name in lines.iter().filter_map(|line| normalize_ingredient(line)) {
                let count = next.entry(name).or_insert(0);
                *count = count.saturating_add(1);
            }
        }

        // A baseline never exceeds what is planned right now.
        self.dismissed.retain(|name, baseline| match next.get(name) {
            Some(&count) if count > 0 => {
                *baseline = (*baseline).min(count);
                true
            }
            _ => false,
        });

        tracing::debug!(
            revision = snapshot.revision(),
            ingredients = next.len(),
            dismissed = self.dismissed.len(),
            "grocery list recomputed"
        );

        self.auto = next;
    }

    /// Merged view of manual and visible auto quantities.
    pub fn items(&self) -> GroceryItems {
        let mut items = self
            .manual
            .iter()
            .map(|(name, quantity)| (name.clone(), (*quantity).max(1)))
            .collect::<BTreeMap<_, _>>();

        for (name, count) in &self.auto {
            let visible = count.saturating_sub(self.baseline(name));
            if visible == 0 {
                continue;
            }

            let quantity = items.entry(name.clone()).or_insert(0);
            *quantity = quantity.saturating_add(visible);
        }

        GroceryItems::new(items)
    }

    pub fn display_lines(&self) -> Vec<String> {
        self.items()
            .iter()
            .map(|(name, quantity)| display_line(name, quantity))
            .collect()
    }

    /// Add to a manual entry. Blank names are ignored; quantities below one
    /// count as one; repeated calls for the same name add up.
    pub fn add_manual_item(&mut self, name: &str, quantity: u32) {
        let Some(name) = normalize_ingredient(name) else {
            return;
        };

        let quantity = quantity.max(1);
        let entry = self.manual.entry(name).or_insert(0);
        *entry = entry.saturating_add(quantity);

        tracing::debug!(total = *entry, added = quantity, "manual grocery item added");
    }

    /// Delete manual entries outright; names without a manual entry are
    /// dismissed as auto items instead.
    pub fn remove_items<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let Some(name) = normalize_ingredient(name.as_ref()) else {
                continue;
            };

            if self.manual.remove(&name).is_some() {
                tracing::info!(name = %name, "manual grocery item removed");
            } else {
                self.dismiss(&name);
            }
        }
    }

    /// Hide the currently planned auto units of each name. Manual entries
    /// with the same name stay as they are.
    pub fn dismiss_items<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            if let Some(name) = normalize_ingredient(name.as_ref()) {
                self.dismiss(&name);
            }
        }
    }

    /// Dismiss everything currently auto-planned in one pass.
    pub fn set_baseline_to_current_auto(&mut self) {
        for (name, count) in &self.auto {
            let baseline = self.dismissed.entry(name.clone()).or_insert(0);
            *baseline = (*baseline).max(*count);
        }

        let auto = &self.auto;
        self.dismissed.retain(|name, _| auto.contains_key(name));

        tracing::info!(dismissed = self.dismissed.len(), "all planned groceries dismissed");
    }

    pub fn auto_items(&self) -> &BTreeMap<String, u32> {
        &self.auto
    }

    pub fn manual_items(&self) -> &BTreeMap<String, u32> {
        &self.manual
    }

    pub fn dismissed_baseline(&self) -> &BTreeMap<String, u32> {
        &self.dismissed
    }

    fn baseline(&self, name: &str) -> u32 {
        self.dismissed.get(name).copied().unwrap_or(0)
    }

    // Ratchet: raise to the current auto count, never lower.
    fn dismiss(&mut self, name: &str) {
        let count = self.auto.get(name).copied().unwrap_or(0);
        if count == 0 {
            return;
        }

        let baseline = self.dismissed.entry(name.to_owned()).or_insert(0);
        *baseline = (*baseline).max(count);

        tracing::info!(name = %name, baseline = *baseline, "auto grocery item dismissed");
    }
}

impl Default for GroceryAggregator {
    fn default() -> Self {
        Self::new(unresolved)
    }
}

impl fmt::Debug for GroceryAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroceryAggregator")
            .field("auto", &self.auto)
            .field("manual", &self.manual)
            .field("dismissed", &self.dismissed)
            .finish_non_exhaustive()
    }
}
