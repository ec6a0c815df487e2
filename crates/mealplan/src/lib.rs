mod daily;
mod error;
mod registry;
mod slots;
mod week;

pub use daily::*;
pub use error::*;
pub use registry::*;
pub use slots::*;
pub use week::*;

pub use weekcart_shared::mealplan::{DaySnapshot, MealPlanObserver, MealSlot, WEEK, WeekSnapshot};
