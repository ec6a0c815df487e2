use std::fmt;
use std::sync::Arc;

use weekcart_shared::{MealPlanObserver, WeekSnapshot};

/// Handle returned when an observer is registered; used to unregister it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// Observers in registration order.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(ObserverId, Arc<dyn MealPlanObserver>)>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Arc<dyn MealPlanObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));

        id
    }

    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);

        before != self.observers.len()
    }

    /// Deliver one snapshot to every observer, in registration order.
    pub fn notify(&self, snapshot: &WeekSnapshot) {
        tracing::debug!(
            revision = snapshot.revision(),
            observers = self.observers.len(),
            "notifying meal plan observers"
        );

        for (_, observer) in &self.observers {
            observer.on_plan_changed(snapshot);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field(
                "observers",
                &self.observers.iter().map(|(id, _)| id).collect::<Vec<_>>(),
            )
            .finish()
    }
}
