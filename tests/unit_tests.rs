/// Unit tests for meal-service core functionality
///
/// This test module covers:
/// - Meal model serialization/deserialization
/// - Sort enum parsing and defaults
/// - MealStore append/list semantics
use chrono::Utc;
use meal_service::models::*;
use meal_service::MealStore;
use uuid::Uuid;

#[test]
fn test_sort_by_serialization() {
    let keys = vec![SortBy::Amount, SortBy::CreatedAt];

    for key in keys {
        let json = serde_json::to_string(&key).unwrap();
        let deserialized: SortBy = serde_json::from_str(&json).unwrap();
        assert_eq!(key, deserialized);
    }
}

#[test]
fn test_sort_order_serialization() {
    let orders = vec![SortOrder::Asc, SortOrder::Desc];

    for order in orders {
        let json = serde_json::to_string(&order).unwrap();
        let deserialized: SortOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deserialized);
    }
}

#[test]
fn test_sort_by_as_str() {
    assert_eq!(SortBy::Amount.as_str(), "amount");
    assert_eq!(SortBy::CreatedAt.as_str(), "created_at");
}

#[test]
fn test_sort_order_as_str() {
    assert_eq!(SortOrder::Asc.as_str(), "asc");
    assert_eq!(SortOrder::Desc.as_str(), "desc");
}

#[test]
fn test_sort_defaults_match_wire_defaults() {
    // An empty query string must behave like order_by=created_at&order=desc
    let params: ListMealsParams = serde_json::from_str("{}").unwrap();
    assert_eq!(params.order_by, SortBy::CreatedAt);
    assert_eq!(params.order, SortOrder::Desc);
}

#[test]
fn test_unknown_sort_values_rejected() {
    assert!(serde_json::from_str::<SortBy>("\"weight\"").is_err());
    assert!(serde_json::from_str::<SortOrder>("\"sideways\"").is_err());
}

#[test]
fn test_meal_serialization_round_trip() {
    let meal = Meal {
        id: Uuid::new_v4(),
        amount: 25,
        created_at: Utc::now(),
    };

    let json = serde_json::to_string(&meal).unwrap();
    let deserialized: Meal = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized.id, meal.id);
    assert_eq!(deserialized.amount, meal.amount);
    assert_eq!(deserialized.created_at, meal.created_at);
}

#[test]
fn test_meal_wire_shape() {
    let meal = Meal {
        id: Uuid::new_v4(),
        amount: 5,
        created_at: Utc::now(),
    };

    let value = serde_json::to_value(&meal).unwrap();

    // id as canonical UUID text, created_at as RFC 3339 with offset
    assert_eq!(value["id"], meal.id.to_string());
    assert!(value["amount"].is_i64());
    let ts = value["created_at"].as_str().unwrap();
    assert!(ts.ends_with('Z') || ts.contains('+'));
}

#[tokio::test]
async fn test_append_increases_count_by_one() {
    let store = MealStore::new();
    assert!(store.is_empty().await);

    for expected in 1..=5 {
        store.append(10).await;
        assert_eq!(store.len().await, expected);
    }
}

#[tokio::test]
async fn test_append_stores_caller_amount() {
    // The amount recorded is the caller's value, not a fixed portion size.
    let store = MealStore::new();
    let meal = store.append(42).await;

    assert_eq!(meal.amount, 42);
    let listed = store.list(SortBy::CreatedAt, SortOrder::Desc).await;
    assert_eq!(listed[0].amount, 42);
}

#[tokio::test]
async fn test_append_generates_unique_ids() {
    let store = MealStore::new();

    let mut ids = Vec::new();
    for _ in 0..50 {
        ids.push(store.append(10).await.id);
    }

    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[tokio::test]
async fn test_created_at_non_decreasing() {
    let store = MealStore::new();

    let mut previous = None;
    for _ in 0..10 {
        let meal = store.append(10).await;
        if let Some(prev) = previous {
            assert!(meal.created_at >= prev);
        }
        previous = Some(meal.created_at);
    }
}

#[tokio::test]
async fn test_list_sorts_by_amount_desc() {
    let store = MealStore::new();
    for amount in [5, 10, 3] {
        store.append(amount).await;
    }

    let meals = store.list(SortBy::Amount, SortOrder::Desc).await;
    let amounts: Vec<i64> = meals.iter().map(|m| m.amount).collect();

    // order=desc means descending output, largest amount first
    assert_eq!(amounts, vec![10, 5, 3]);
}

#[tokio::test]
async fn test_list_sorts_by_amount_asc() {
    let store = MealStore::new();
    for amount in [5, 10, 3] {
        store.append(amount).await;
    }

    let meals = store.list(SortBy::Amount, SortOrder::Asc).await;
    let amounts: Vec<i64> = meals.iter().map(|m| m.amount).collect();

    assert_eq!(amounts, vec![3, 5, 10]);
}

#[tokio::test]
async fn test_list_sorts_by_created_at() {
    let store = MealStore::new();
    let first = store.append(1).await;
    let second = store.append(2).await;
    let third = store.append(3).await;

    let desc = store.list(SortBy::CreatedAt, SortOrder::Desc).await;
    let asc = store.list(SortBy::CreatedAt, SortOrder::Asc).await;

    // Sequential appends take non-decreasing timestamps; with the stable
    // tie-break this makes the orderings exactly insertion order / its reverse.
    assert_eq!(
        asc.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![first.id, second.id, third.id]
    );
    assert_eq!(
        desc.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![third.id, second.id, first.id]
    );
}

#[tokio::test]
async fn test_list_ties_resolve_by_insertion_order() {
    let store = MealStore::new();
    let first = store.append(10).await;
    let second = store.append(10).await;
    let third = store.append(10).await;

    for order in [SortOrder::Asc, SortOrder::Desc] {
        let meals = store.list(SortBy::Amount, order).await;
        let ids: Vec<Uuid> = meals.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }
}

#[tokio::test]
async fn test_list_is_idempotent() {
    let store = MealStore::new();
    for amount in [7, 2, 9] {
        store.append(amount).await;
    }

    let a = store.list(SortBy::Amount, SortOrder::Desc).await;
    let b = store.list(SortBy::Amount, SortOrder::Desc).await;

    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.amount, y.amount);
        assert_eq!(x.created_at, y.created_at);
    }
    // And the store itself is untouched
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn test_list_empty_store() {
    let store = MealStore::new();
    let meals = store.list(SortBy::Amount, SortOrder::Asc).await;
    assert!(meals.is_empty());
}

#[tokio::test]
async fn test_negative_amount_accepted() {
    // No range restriction exists on amounts; any integer is stored as-is.
    let store = MealStore::new();
    let meal = store.append(-3).await;
    assert_eq!(meal.amount, -3);
}
