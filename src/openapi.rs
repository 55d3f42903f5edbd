/// OpenAPI documentation for Meal Service
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cat Feeder API",
        version = "1.0.0",
        description = "Records and lists feeding events for an automated cat feeder. Meals live in memory for the lifetime of the process; there is no persistence or authentication.",
        license(
            name = "MIT"
        )
    ),
    paths(
        crate::handlers::meals::list_meals,
        crate::handlers::meals::create_meal,
    ),
    components(
        schemas(
            crate::models::Meal,
            crate::models::CreateMealRequest,
            crate::models::MealsResponse,
            crate::models::SortBy,
            crate::models::SortOrder,
        )
    ),
    tags(
        (name = "meals", description = "Recording and listing feeding events"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Title as declared in the info block above
    pub fn title() -> String {
        ApiDoc::openapi().info.title
    }

    /// Version as declared in the info block above
    pub fn version() -> String {
        ApiDoc::openapi().info.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_includes_meal_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/meals"));
    }

    #[test]
    fn helpers_track_info_block() {
        let doc = ApiDoc::openapi();
        assert_eq!(ApiDoc::title(), doc.info.title);
        assert_eq!(ApiDoc::version(), doc.info.version);
    }
}
