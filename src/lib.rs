pub mod config;
pub mod error;
pub mod kitchen;
pub mod observability;

pub use config::Config;
pub use error::{KitchenError, Result};
pub use kitchen::Kitchen;

pub use weekcart_mealplan::{ActiveSlots, MealPlanError, ObserverId, WeekPlan};
pub use weekcart_shared::{
    DaySnapshot, IngredientResolver, MealPlanObserver, MealSlot, RecipeRef, WeekSnapshot,
};
pub use weekcart_shopping::{GroceryAggregator, GroceryItems, GroceryList};
