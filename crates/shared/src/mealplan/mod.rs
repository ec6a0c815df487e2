use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, ser::SerializeMap};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Weekday;

use crate::recipe::RecipeRef;

/// Days of the planned week in calendar order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    /// Short label shown in the planner grid header.
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "B",
            MealSlot::Lunch => "L",
            MealSlot::Dinner => "D",
            MealSlot::Snacks => "S",
        }
    }
}

/// Read-only view of one day: only assigned slots are present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DaySnapshot(BTreeMap<MealSlot, RecipeRef>);

impl DaySnapshot {
    pub fn get(&self, slot: MealSlot) -> Option<&RecipeRef> {
        self.0.get(&slot)
    }

    /// Assigned slots in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &RecipeRef)> {
        self.0.iter().map(|(slot, recipe)| (*slot, recipe))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(MealSlot, RecipeRef)> for DaySnapshot {
    fn from_iter<T: IntoIterator<Item = (MealSlot, RecipeRef)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Full point-in-time copy of a week plan.
///
/// Built once per change and shared read-only with every observer; it never
/// aliases the plan's live state. All seven days are always present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekSnapshot {
    revision: u64,
    days: [DaySnapshot; 7],
}

impl WeekSnapshot {
    pub fn new(revision: u64, days: [DaySnapshot; 7]) -> Self {
        Self { revision, days }
    }

    /// Build a snapshot from loose `(day, slot, recipe)` cells. Later cells
    /// overwrite earlier ones for the same day and slot.
    pub fn from_assignments(
        revision: u64,
        assignments: impl IntoIterator<Item = (Weekday, MealSlot, RecipeRef)>,
    ) -> Self {
        let mut days: [BTreeMap<MealSlot, RecipeRef>; 7] = Default::default();
        for (day, slot, recipe) in assignments {
            days[day.number_days_from_monday() as usize].insert(slot, recipe);
        }

        Self {
            revision,
            days: days.map(DaySnapshot),
        }
    }

    /// Plan revision this snapshot was taken at.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn day(&self, day: Weekday) -> &DaySnapshot {
        &self.days[day.number_days_from_monday() as usize]
    }

    pub fn get(&self, day: Weekday, slot: MealSlot) -> Option<&RecipeRef> {
        self.day(day).get(slot)
    }

    /// Every day, Monday first.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DaySnapshot)> {
        WEEK.into_iter().zip(self.days.iter())
    }

    /// Every assigned cell in calendar order, then slot order.
    pub fn assignments(&self) -> impl Iterator<Item = (Weekday, MealSlot, &RecipeRef)> {
        self.days()
            .flat_map(|(day, plan)| plan.iter().map(move |(slot, recipe)| (day, slot, recipe)))
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(DaySnapshot::is_empty)
    }
}

impl Serialize for WeekSnapshot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, plan) in self.days() {
            map.serialize_entry(&day.to_string(), plan)?;
        }
        map.end()
    }
}

/// Receiver of week plan snapshots.
///
/// Called synchronously, inside the mutation that produced the snapshot.
/// Implementations must treat the snapshot as read-only, must not assume it
/// is delivered again before the next change, and must never call back into
/// the plan's mutating operations from this callback.
pub trait MealPlanObserver: Send + Sync {
    fn on_plan_changed(&self, snapshot: &WeekSnapshot);
}

impl<F> MealPlanObserver for F
where
    F: Fn(&WeekSnapshot) + Send + Sync,
{
    fn on_plan_changed(&self, snapshot: &WeekSnapshot) {
        self(snapshot)
    }
}
