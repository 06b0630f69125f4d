//! Shared application state.

use domain_pokemon::{DescriptionTranslator, PokemonFetcher};
use std::sync::Arc;

/// Cloned into each router; every field is a cheap Arc clone.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Species lookup against the PokeAPI
    pub fetcher: Arc<dyn PokemonFetcher>,
    /// Description rewriting with fallback to the original text
    pub translator: Arc<dyn DescriptionTranslator>,
}
