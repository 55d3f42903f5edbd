use actix_web::{middleware, web, App, HttpServer};
use meal_service::{
    error::{json_error_handler, query_error_handler},
    handlers::{
        meals::register_routes as register_meals, system::register_routes as register_system,
    },
    metrics,
    openapi::ApiDoc,
    Config, MealStore,
};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting meal service");

    let config = Config::from_env().map_err(io::Error::other)?;

    // The store is constructed once here and injected into the handlers;
    // nothing else holds the collection.
    let store = MealStore::new();

    let openapi_doc = ApiDoc::openapi();

    let addr = config.bind_addr();
    tracing::info!(env = %config.env, "Starting HTTP server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .wrap(middleware::Logger::default())
            .wrap(metrics::MetricsMiddleware)
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", openapi_doc.clone()),
            )
            .configure(|cfg| {
                register_system(cfg);
                register_meals(cfg);
            })
    })
    .bind(&addr)?
    .run()
    .await
}
