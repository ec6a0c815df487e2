use std::collections::BTreeSet;
use std::str::FromStr;

use strum::VariantArray;
use weekcart_shared::MealSlot;

use crate::{MealPlanError, Result};

/// Meal slots currently displayed by the planner. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSlots(BTreeSet<MealSlot>);

impl ActiveSlots {
    pub fn new(slots: impl IntoIterator<Item = MealSlot>) -> Result<Self> {
        let slots = slots.into_iter().collect::<BTreeSet<_>>();
        if slots.is_empty() {
            return Err(MealPlanError::InvalidArgument(
                "at least one meal slot must be active".to_owned(),
            ));
        }

        Ok(Self(slots))
    }

    /// Parse slot names such as `"breakfast"` or `"Dinner"`.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let slots = names
            .iter()
            .map(|name| {
                let name = name.as_ref().trim();
                MealSlot::from_str(name).map_err(|_| {
                    MealPlanError::InvalidArgument(format!("unknown meal slot '{name}'"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(slots)
    }

    pub fn all() -> Self {
        Self(MealSlot::VARIANTS.iter().copied().collect())
    }

    pub fn contains(&self, slot: MealSlot) -> bool {
        self.0.contains(&slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = MealSlot> {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for ActiveSlots {
    fn default() -> Self {
        Self::all()
    }
}

impl TryFrom<Vec<MealSlot>> for ActiveSlots {
    type Error = MealPlanError;

    fn try_from(value: Vec<MealSlot>) -> Result<Self> {
        Self::new(value)
    }
}
