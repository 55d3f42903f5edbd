/// In-memory meal store
///
/// Holds every recorded meal for the lifetime of the process. One instance
/// is created at startup and shared with the handlers via `web::Data`.
/// State is process-local; a restart discards all records.
use crate::models::{Meal, SortBy, SortOrder};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Thread-safe, append-only collection of meals
///
/// Shared state follows the Arc<RwLock<_>> idiom: writers hold the lock only
/// for the push, readers only for the snapshot. No I/O happens under the lock.
#[derive(Clone, Default)]
pub struct MealStore {
    meals: Arc<RwLock<Vec<Meal>>>,
}

impl MealStore {
    pub fn new() -> Self {
        Self {
            meals: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Record a meal of `amount` grams
    ///
    /// Generates the id and timestamp server-side and appends the record to
    /// the end of the collection. Returns the full record, including the
    /// generated fields. This operation cannot fail.
    pub async fn append(&self, amount: i64) -> Meal {
        let meal = Meal {
            id: Uuid::new_v4(),
            amount,
            created_at: Utc::now(),
        };

        let mut meals = self.meals.write().await;
        meals.push(meal.clone());
        meal
    }

    /// Return all recorded meals sorted by the given key and direction
    ///
    /// Uses a stable sort, so records with equal keys keep their insertion
    /// order. Does not mutate the store.
    pub async fn list(&self, sort_by: SortBy, order: SortOrder) -> Vec<Meal> {
        let meals = self.meals.read().await;
        let mut sorted = meals.clone();
        drop(meals);

        // Reversing the comparator (rather than the sorted output) keeps the
        // stable-sort guarantee: equal keys stay in insertion order either way.
        match (sort_by, order) {
            (SortBy::Amount, SortOrder::Asc) => sorted.sort_by(|a, b| a.amount.cmp(&b.amount)),
            (SortBy::Amount, SortOrder::Desc) => sorted.sort_by(|a, b| b.amount.cmp(&a.amount)),
            (SortBy::CreatedAt, SortOrder::Asc) => {
                sorted.sort_by(|a, b| a.created_at.cmp(&b.created_at))
            }
            (SortBy::CreatedAt, SortOrder::Desc) => {
                sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at))
            }
        }

        sorted
    }

    /// Number of meals currently recorded
    pub async fn len(&self) -> usize {
        self.meals.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.meals.read().await.is_empty()
    }
}
