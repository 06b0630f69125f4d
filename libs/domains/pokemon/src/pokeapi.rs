//! Species lookup against the PokeAPI.

use async_trait::async_trait;
use core_config::upstream::UpstreamConfig;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::client::{UpstreamClient, UpstreamResponse};
use crate::error::{PokemonError, PokemonResult};
use crate::models::Pokemon;

const SPECIES_PATH: &str = "/api/v2/pokemon-species";
const ENGLISH: &str = "en";

/// Source of species data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonFetcher: Send + Sync {
    /// Looks a species up by name; `Ok(None)` means it does not exist.
    async fn fetch_by_name(&self, name: &str) -> PokemonResult<Option<Pokemon>>;
}

/// The subset of a species payload the API cares about.
///
/// Missing fields fall back to their zero value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SpeciesResponse {
    pub name: String,
    pub is_legendary: bool,
    pub habitat: Option<NamedResource>,
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

impl SpeciesResponse {
    /// Text of the last English flavor entry, flattened to one line.
    ///
    /// Empty when no entry is in English.
    pub fn english_description(&self) -> String {
        self.flavor_text_entries
            .iter()
            .rev()
            .find(|entry| entry.language.name == ENGLISH)
            .map(|entry| flatten_flavor_text(&entry.flavor_text))
            .unwrap_or_default()
    }
}

/// Line feeds become spaces, form feeds are dropped.
fn flatten_flavor_text(text: &str) -> String {
    text.replace('\n', " ").replace('\u{000C}', "")
}

impl From<SpeciesResponse> for Pokemon {
    fn from(species: SpeciesResponse) -> Self {
        let description = species.english_description();
        Pokemon {
            name: species.name,
            description,
            habitat: species.habitat.map(|h| h.name).unwrap_or_default(),
            is_legendary: species.is_legendary,
        }
    }
}

/// [`PokemonFetcher`] backed by `GET {base}/api/v2/pokemon-species/{name}`.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    upstream: UpstreamClient,
}

impl PokeApiClient {
    pub fn new(config: &UpstreamConfig) -> PokemonResult<Self> {
        Ok(Self {
            upstream: UpstreamClient::new("pokeapi", config)?,
        })
    }
}

#[async_trait]
impl PokemonFetcher for PokeApiClient {
    #[instrument(skip(self))]
    async fn fetch_by_name(&self, name: &str) -> PokemonResult<Option<Pokemon>> {
        if name.trim().is_empty() {
            return Ok(None);
        }

        let path = format!("{SPECIES_PATH}/{}", urlencoding::encode(name));
        let response = self
            .upstream
            .execute::<SpeciesResponse>(self.upstream.get(&path))
            .await?;

        match response {
            UpstreamResponse::Success(species) => Ok(Some(species.into())),
            UpstreamResponse::Failure(StatusCode::NOT_FOUND) => {
                debug!("Species not found upstream");
                Ok(None)
            }
            UpstreamResponse::Failure(status) => Err(PokemonError::Status(status)),
        }
    }
}
