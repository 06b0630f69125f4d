use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_pokemon::{FunTranslationsClient, PokeApiClient, TranslationService};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Colored error reports must be installed before anything can fail
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        pokeapi = %config.pokeapi.base_url,
        funtranslations = %config.funtranslations.base_url,
        "Configuring upstream clients"
    );
    let fetcher = PokeApiClient::new(&config.pokeapi)?;
    let translator = FunTranslationsClient::new(&config.funtranslations)?;

    let state = AppState {
        fetcher: Arc::new(fetcher),
        translator: Arc::new(TranslationService::new(translator)),
        config,
    };

    // Health routes go through create_router too so they get the same layers
    let routes = api::routes(&state).merge(health_router(state.config.app.clone()));
    let app = create_router(routes);

    let server = state.config.server.clone();

    info!("Starting pokedex API with graceful shutdown (30s timeout)");

    create_production_app(
        app,
        &server,
        Duration::from_secs(30),
        async move {
            // Upstream clients hold no resources that need closing
            info!("Shutting down: releasing upstream clients");
            drop(state);
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Pokedex API shutdown complete");
    Ok(())
}
