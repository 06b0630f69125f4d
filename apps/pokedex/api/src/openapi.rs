use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Pokedex API",
        version = "0.1.0",
        description = "Pokemon lookup with optional Yoda or Shakespeare descriptions"
    )
)]
pub struct ApiDoc;

/// Service document with the pokemon paths merged in.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(domain_pokemon::ApiDoc::openapi());
    doc
}
