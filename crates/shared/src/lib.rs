pub mod mealplan;
pub mod recipe;

pub use mealplan::{DaySnapshot, MealPlanObserver, MealSlot, WeekSnapshot};
pub use recipe::{IngredientResolver, RecipeRef};
