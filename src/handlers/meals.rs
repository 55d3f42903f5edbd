/// Meal collection handlers
///
/// GET /meals  — list recorded meals, sortable by amount or creation time
/// POST /meals — record a new meal
use crate::error::AppError;
use crate::metrics;
use crate::models::{CreateMealRequest, ListMealsParams, Meal, MealsResponse};
use crate::store::MealStore;
use actix_web::{web, HttpResponse};
use tracing::{debug, info};

/// List all recorded meals
#[utoipa::path(
    get,
    path = "/meals",
    params(ListMealsParams),
    responses(
        (status = 200, description = "Meals sorted by the requested key", body = MealsResponse),
        (status = 400, description = "Unknown order_by or order value")
    ),
    tag = "meals"
)]
pub async fn list_meals(
    store: web::Data<MealStore>,
    query: web::Query<ListMealsParams>,
) -> Result<HttpResponse, AppError> {
    debug!(
        order_by = query.order_by.as_str(),
        order = query.order.as_str(),
        "listing meals"
    );

    let meals = store.list(query.order_by, query.order).await;

    Ok(HttpResponse::Ok().json(MealsResponse { meals }))
}

/// Record a new meal
#[utoipa::path(
    post,
    path = "/meals",
    request_body = CreateMealRequest,
    responses(
        (status = 201, description = "Meal recorded", body = Meal),
        (status = 400, description = "Missing or non-integer amount")
    ),
    tag = "meals"
)]
pub async fn create_meal(
    store: web::Data<MealStore>,
    body: web::Json<CreateMealRequest>,
) -> Result<HttpResponse, AppError> {
    let meal = store.append(body.amount).await;
    metrics::observe_meal_recorded();

    info!(meal_id = %meal.id, amount = meal.amount, "meal recorded");

    Ok(HttpResponse::Created().json(meal))
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/meals")
            .route("", web::get().to(list_meals))
            .route("", web::post().to(create_meal)),
    );
}
