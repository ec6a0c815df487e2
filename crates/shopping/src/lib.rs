mod aggregator;
mod items;
mod list;
mod normalize;

pub use aggregator::GroceryAggregator;
pub use items::{GroceryItems, display_line};
pub use list::GroceryList;
pub use normalize::normalize_ingredient;
