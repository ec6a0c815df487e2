//! End-to-end tests: the grocery list is only driven through plan changes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

use time::Weekday;
use weekcart::{Kitchen, MealSlot, RecipeRef, WeekSnapshot};
use weekcart_mealplan::WEEK;

fn kitchen() -> Kitchen {
    let book: HashMap<RecipeRef, Vec<String>> = HashMap::from([
        ("omelet".into(), vec!["Eggs".into(), "Milk".into(), "Bread".into()]),
        ("pancakes".into(), vec!["Milk".into(), "Butter".into()]),
        ("cereal".into(), vec!["Milk".into()]),
        ("pasta".into(), vec!["Milk".into()]),
        ("salad".into(), vec!["Lettuce".into(), "Tomato".into()]),
    ]);

    Kitchen::new(book)
}

#[test]
fn test_aggregates_across_days_and_slots() {
    let kitchen = kitchen();

    kitchen.set_recipe(Weekday::Monday, MealSlot::Breakfast, Some("omelet".into()));
    kitchen.set_recipe(Weekday::Monday, MealSlot::Dinner, Some("pancakes".into()));
    kitchen.set_recipe(Weekday::Tuesday, MealSlot::Lunch, Some("cereal".into()));

    let items = kitchen.items();
    assert_eq!(items.get("Eggs"), Some(1));
    assert_eq!(items.get("Bread"), Some(1));
    assert_eq!(items.get("Butter"), Some(1));
    assert_eq!(items.get("Milk"), Some(3));
    assert_eq!(items.len(), 4);
    assert_eq!(kitchen.display_lines(), ["Bread", "Butter", "Eggs", "Milk x3"]);
}

#[test]
fn test_items_serialize_as_name_to_quantity() -> anyhow::Result<()> {
    let kitchen = kitchen();
    kitchen.set_recipe(Weekday::Monday, MealSlot::Breakfast, Some("omelet".into()));
    kitchen.set_recipe(Weekday::Monday, MealSlot::Lunch, Some("cereal".into()));

    assert_eq!(
        serde_json::to_value(kitchen.items())?,
        serde_json::json!({ "Bread": 1, "Eggs": 1, "Milk": 2 })
    );
    assert_eq!(
        serde_json::to_value(kitchen.snapshot())?["Monday"],
        serde_json::json!({ "Breakfast": "omelet", "Lunch": "cereal" })
    );

    Ok(())
}

#[test]
fn test_dismissal_survives_active_slot_change() {
    let kitchen = kitchen();
    kitchen.set_recipe(Weekday::Wednesday, MealSlot::Dinner, Some("pasta".into()));
    assert!(kitchen.items().contains("Milk"));

    kitchen.dismiss_items(["Milk"]);
    assert!(!kitchen.items().contains("Milk"));

    kitchen
        .set_active_slots([MealSlot::Breakfast, MealSlot::Dinner])
        .unwrap();
    assert!(!kitchen.items().contains("Milk"));

    // A second Milk source shows exactly one new unit.
    kitchen.set_recipe(Weekday::Thursday, MealSlot::Breakfast, Some("cereal".into()));
    assert_eq!(kitchen.items().get("Milk"), Some(1));
}

#[test]
fn test_clearing_a_plan_cell_updates_the_list() {
    let kitchen = kitchen();

    kitchen.set_recipe(Weekday::Friday, MealSlot::Lunch, Some("salad".into()));
    assert!(kitchen.items().contains("Lettuce"));
    assert!(kitchen.items().contains("Tomato"));

    kitchen.clear(Weekday::Friday, MealSlot::Lunch);

    let items = kitchen.items();
    assert!(!items.contains("Lettuce"));
    assert!(!items.contains("Tomato"));
}

#[test]
fn test_manual_and_auto_quantities_add_up() {
    let kitchen = kitchen();
    kitchen.set_recipe(Weekday::Monday, MealSlot::Breakfast, Some("cereal".into()));
    kitchen.set_recipe(Weekday::Monday, MealSlot::Lunch, Some("pasta".into()));

    kitchen.add_manual_item("Milk", 2);

    assert_eq!(kitchen.items().get("Milk"), Some(4));
}

#[test]
fn test_remove_splits_manual_and_auto() {
    let kitchen = kitchen();
    kitchen.set_recipe(Weekday::Monday, MealSlot::Breakfast, Some("cereal".into()));
    kitchen.add_manual_item("Eggs", 1);

    kitchen.remove_items(["Eggs", "Milk"]);

    assert!(kitchen.items().is_empty());

    // Re-planning the same cell is not growth; Milk stays hidden.
    kitchen.set_recipe(Weekday::Monday, MealSlot::Breakfast, Some("cereal".into()));
    assert!(kitchen.items().is_empty());
}

#[test]
fn test_replacing_a_recipe_version_updates_the_list() {
    let kitchen = kitchen();
    kitchen.set_recipe(Weekday::Monday, MealSlot::Lunch, Some("cereal".into()));
    kitchen.set_recipe(Weekday::Sunday, MealSlot::Lunch, Some("cereal".into()));

    assert!(kitchen.replace_recipe_references(&"cereal".into(), &"salad".into()));

    let items = kitchen.items();
    assert!(!items.contains("Milk"));
    assert_eq!(items.get("Lettuce"), Some(2));
    assert_eq!(
        kitchen.recipe(Weekday::Sunday, MealSlot::Lunch),
        Some(RecipeRef::from("salad"))
    );
}

#[test]
fn test_bulk_dismiss_then_new_week() {
    let kitchen = kitchen();
    kitchen.set_recipe(Weekday::Monday, MealSlot::Breakfast, Some("omelet".into()));
    kitchen.add_manual_item("Coffee", 1);

    kitchen.set_baseline_to_current_auto();
    assert_eq!(kitchen.display_lines(), ["Coffee"]);

    for day in WEEK {
        kitchen.clear(day, MealSlot::Breakfast);
    }
    kitchen.set_recipe(Weekday::Monday, MealSlot::Breakfast, Some("omelet".into()));

    assert_eq!(kitchen.display_lines(), ["Bread", "Coffee", "Eggs", "Milk"]);
}

#[test]
fn test_extra_observers_see_each_change() {
    let kitchen = kitchen();
    let seen = Arc::new(Mutex::new(Vec::<u64>::new()));

    let recorder = seen.clone();
    let id = kitchen.add_observer(Arc::new(move |snapshot: &WeekSnapshot| {
        recorder.lock().unwrap().push(snapshot.revision());
    }));
    kitchen.set_recipe(Weekday::Monday, MealSlot::Lunch, Some("pasta".into()));
    kitchen.remove_observer(id);
    kitchen.clear(Weekday::Monday, MealSlot::Lunch);

    assert_eq!(*seen.lock().unwrap(), [0, 1]);
    assert_eq!(kitchen.snapshot().revision(), 2);
}

#[test]
fn test_concurrent_planning_and_reading_never_tears() {
    let kitchen = kitchen();
    let cells = WEEK
        .iter()
        .flat_map(|day| {
            [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner, MealSlot::Snacks]
                .map(|slot| (*day, slot))
        })
        .collect::<Vec<_>>();

    thread::scope(|scope| {
        for chunk in cells.chunks(7) {
            let kitchen = &kitchen;
            scope.spawn(move || {
                for (day, slot) in chunk {
                    kitchen.set_recipe(*day, *slot, Some("cereal".into()));
                }
            });
        }

        scope.spawn(|| {
            let mut last = 0;
            for _ in 0..200 {
                let milk = kitchen.items().get("Milk").unwrap_or(0);
                assert!(milk >= last, "Milk went from {last} to {milk}");
                assert!(milk <= 28);
                last = milk;
            }
        });
    });

    assert_eq!(kitchen.items().get("Milk"), Some(28));
    assert_eq!(kitchen.snapshot().assignments().count(), 28);
}
