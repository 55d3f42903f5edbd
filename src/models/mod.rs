use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Sort key for meal listings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Sort by gram amount
    Amount,
    /// Sort by creation timestamp
    CreatedAt,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Amount => "amount",
            SortBy::CreatedAt => "created_at",
        }
    }
}

impl Default for SortBy {
    fn default() -> Self {
        SortBy::CreatedAt
    }
}

/// Sort direction for meal listings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest/oldest first
    Asc,
    /// Largest/newest first
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}

/// One recorded feeding event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    /// Server-generated identifier
    pub id: Uuid,

    /// Portion size in grams
    pub amount: i64,

    /// Timestamp captured when the meal was recorded
    pub created_at: DateTime<Utc>,
}

/// Request body for recording a meal
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMealRequest {
    /// Portion size in grams
    pub amount: i64,
}

/// Query parameters for listing meals
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct ListMealsParams {
    /// Field to sort by (default: created_at)
    #[serde(default)]
    pub order_by: SortBy,

    /// Sort direction (default: desc)
    #[serde(default)]
    pub order: SortOrder,
}

/// Response envelope for meal listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MealsResponse {
    pub meals: Vec<Meal>,
}
