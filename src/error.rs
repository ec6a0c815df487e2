use thiserror::Error;
use weekcart_mealplan::MealPlanError;

#[derive(Error, Debug)]
pub enum KitchenError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Meal plan error: {0}")]
    MealPlan(#[from] MealPlanError),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, KitchenError>;
