//! HTTP handlers for the Pokemon API

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use axum_helpers::{AppError, ErrorResponse};
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::OpenApi;

use crate::models::Pokemon;
use crate::pokeapi::PokemonFetcher;
use crate::service::DescriptionTranslator;

pub const POKEMON_NOT_FOUND: &str = "pokemon not found";

/// OpenAPI documentation for the Pokemon API
#[derive(OpenApi)]
#[openapi(
    paths(get_pokemon, get_translated_pokemon),
    components(schemas(Pokemon, ErrorResponse)),
    tags(
        (name = "Pokemon", description = "Pokemon lookup endpoints")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
struct PokedexState {
    fetcher: Arc<dyn PokemonFetcher>,
    translator: Arc<dyn DescriptionTranslator>,
}

/// Create the pokemon router with both lookup endpoints
pub fn router(
    fetcher: Arc<dyn PokemonFetcher>,
    translator: Arc<dyn DescriptionTranslator>,
) -> Router {
    Router::new()
        .route("/v1/pokemon/{name}", get(get_pokemon))
        .route("/v1/pokemon/translated/{name}", get(get_translated_pokemon))
        .with_state(PokedexState {
            fetcher,
            translator,
        })
}

/// Get a pokemon by name
#[utoipa::path(
    get,
    path = "/v1/pokemon/{name}",
    tag = "Pokemon",
    params(("name" = String, Path, description = "Species name")),
    responses(
        (status = 200, description = "Pokemon found", body = Pokemon),
        (status = 404, description = "Pokemon not found", body = ErrorResponse),
        (status = 500, description = "Species lookup failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
async fn get_pokemon(
    State(state): State<PokedexState>,
    Path(name): Path<String>,
) -> Result<Json<Pokemon>, AppError> {
    let pokemon = fetch_pokemon(state.fetcher.as_ref(), &name).await?;
    Ok(Json(pokemon))
}

/// Get a pokemon by name with a stylized description
///
/// Legendary and cave-dwelling pokemon get the Yoda style, all others
/// Shakespeare. If the translation fails the original description is kept.
#[utoipa::path(
    get,
    path = "/v1/pokemon/translated/{name}",
    tag = "Pokemon",
    params(("name" = String, Path, description = "Species name")),
    responses(
        (status = 200, description = "Pokemon found", body = Pokemon),
        (status = 404, description = "Pokemon not found", body = ErrorResponse),
        (status = 500, description = "Species lookup failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
async fn get_translated_pokemon(
    State(state): State<PokedexState>,
    Path(name): Path<String>,
) -> Result<Json<Pokemon>, AppError> {
    let mut pokemon = fetch_pokemon(state.fetcher.as_ref(), &name).await?;
    pokemon.description = state.translator.translate_description(&pokemon).await;
    Ok(Json(pokemon))
}

async fn fetch_pokemon(fetcher: &dyn PokemonFetcher, name: &str) -> Result<Pokemon, AppError> {
    match fetcher.fetch_by_name(name).await {
        Ok(Some(pokemon)) => Ok(pokemon),
        Ok(None) => {
            info!(name, "pokemon not found");
            Err(AppError::NotFound(POKEMON_NOT_FOUND.to_string()))
        }
        Err(err) => Err(AppError::InternalServerError(format!(
            "unable to fetch pokemon: {name}: {err}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PokemonError;
    use crate::pokeapi::MockPokemonFetcher;
    use crate::service::MockDescriptionTranslator;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn mewtwo() -> Pokemon {
        Pokemon {
            name: "mewtwo".to_string(),
            description: "It was created by a scientist.".to_string(),
            habitat: "rare".to_string(),
            is_legendary: true,
        }
    }

    fn fetcher_returning(pokemon: Option<Pokemon>) -> MockPokemonFetcher {
        let mut fetcher = MockPokemonFetcher::new();
        fetcher
            .expect_fetch_by_name()
            .withf(|name| name == "mewtwo")
            .times(1)
            .returning(move |_| Ok(pokemon.clone()));
        fetcher
    }

    fn untouched_translator() -> MockDescriptionTranslator {
        let mut translator = MockDescriptionTranslator::new();
        translator.expect_translate_description().never();
        translator
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_get_pokemon_returns_entity() {
        let app = router(
            Arc::new(fetcher_returning(Some(mewtwo()))),
            Arc::new(untouched_translator()),
        );

        let (status, body) = send(app, "/v1/pokemon/mewtwo").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "Name": "mewtwo",
                "Description": "It was created by a scientist.",
                "Habitat": "rare",
                "IsLegendary": true
            })
        );
    }

    #[tokio::test]
    async fn test_get_pokemon_not_found() {
        let app = router(
            Arc::new(fetcher_returning(None)),
            Arc::new(untouched_translator()),
        );

        let (status, body) = send(app, "/v1/pokemon/mewtwo").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"Error": "pokemon not found"}));
    }

    #[tokio::test]
    async fn test_get_pokemon_upstream_failure() {
        let mut fetcher = MockPokemonFetcher::new();
        fetcher
            .expect_fetch_by_name()
            .returning(|_| Err(PokemonError::Status(reqwest::StatusCode::BAD_GATEWAY)));

        let app = router(Arc::new(fetcher), Arc::new(untouched_translator()));
        let (status, body) = send(app, "/v1/pokemon/mewtwo").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"Error": "unable to fetch pokemon: mewtwo: invalid response code: 502 Bad Gateway"})
        );
    }

    #[tokio::test]
    async fn test_get_translated_pokemon_replaces_description() {
        let mut translator = MockDescriptionTranslator::new();
        translator
            .expect_translate_description()
            .withf(|pokemon| pokemon.name == "mewtwo")
            .times(1)
            .returning(|_| "Created by a scientist, it was.".to_string());

        let app = router(
            Arc::new(fetcher_returning(Some(mewtwo()))),
            Arc::new(translator),
        );
        let (status, body) = send(app, "/v1/pokemon/translated/mewtwo").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Name"], "mewtwo");
        assert_eq!(body["Description"], "Created by a scientist, it was.");
        assert_eq!(body["Habitat"], "rare");
        assert_eq!(body["IsLegendary"], true);
    }

    #[tokio::test]
    async fn test_get_translated_pokemon_not_found_skips_translation() {
        let app = router(
            Arc::new(fetcher_returning(None)),
            Arc::new(untouched_translator()),
        );

        let (status, body) = send(app, "/v1/pokemon/translated/mewtwo").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"Error": "pokemon not found"}));
    }

    #[tokio::test]
    async fn test_get_translated_pokemon_upstream_failure_skips_translation() {
        let mut fetcher = MockPokemonFetcher::new();
        fetcher
            .expect_fetch_by_name()
            .returning(|_| Err(PokemonError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE)));

        let app = router(Arc::new(fetcher), Arc::new(untouched_translator()));
        let (status, body) = send(app, "/v1/pokemon/translated/mewtwo").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            body["Error"]
                .as_str()
                .unwrap()
                .starts_with("unable to fetch pokemon: mewtwo: ")
        );
    }

    #[test]
    fn test_openapi_lists_both_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/v1/pokemon/{name}"));
        assert!(doc.paths.paths.contains_key("/v1/pokemon/translated/{name}"));
    }
}
