use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MealPlanError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, MealPlanError>;
