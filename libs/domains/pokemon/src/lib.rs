//! Pokemon Domain
//!
//! Looks species up in the PokeAPI and optionally rewrites their description
//! through FunTranslations.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │     Handlers     │  ← HTTP endpoints
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │     Service      │  ← Style selection, translation fallback
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ PokeAPI / FunTr. │  ← Upstream adapters (traits + reqwest clients)
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │      Models      │  ← Pokemon, TranslationStyle
//! └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::{sync::Arc, time::Duration};
//! use core_config::upstream::UpstreamConfig;
//! use domain_pokemon::{FunTranslationsClient, PokeApiClient, TranslationService, handlers};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let timeout = Duration::from_secs(10);
//! let fetcher = PokeApiClient::new(&UpstreamConfig::new("https://pokeapi.co", timeout))?;
//! let translator = FunTranslationsClient::new(&UpstreamConfig::new(
//!     "https://api.funtranslations.com",
//!     timeout,
//! ))?;
//!
//! let router = handlers::router(
//!     Arc::new(fetcher),
//!     Arc::new(TranslationService::new(translator)),
//! );
//! # Ok(())
//! # }
//! ```

mod client;
pub mod error;
pub mod funtranslations;
pub mod handlers;
pub mod models;
pub mod pokeapi;
pub mod service;

// Re-export commonly used types
pub use error::{PokemonError, PokemonResult};
pub use funtranslations::{FunTranslationsClient, Translator};
pub use handlers::ApiDoc;
pub use models::{Pokemon, TranslationStyle};
pub use pokeapi::{PokeApiClient, PokemonFetcher};
pub use service::{DescriptionTranslator, TranslationService};
