use async_trait::async_trait;
use tracing::{instrument, warn};

use crate::funtranslations::Translator;
use crate::models::{Pokemon, TranslationStyle};

/// Produces the description served by the translated endpoint.
///
/// Never fails: when a rewrite is unavailable the original text comes back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DescriptionTranslator: Send + Sync {
    async fn translate_description(&self, pokemon: &Pokemon) -> String;
}

/// Picks a style for a pokemon and falls back to its original description
/// when the translator errors.
pub struct TranslationService<T: Translator> {
    translator: T,
}

impl<T: Translator> TranslationService<T> {
    pub fn new(translator: T) -> Self {
        Self { translator }
    }
}

#[async_trait]
impl<T: Translator> DescriptionTranslator for TranslationService<T> {
    #[instrument(skip(self, pokemon), fields(pokemon = %pokemon.name))]
    async fn translate_description(&self, pokemon: &Pokemon) -> String {
        let style = TranslationStyle::for_pokemon(pokemon);
        let translated = match style {
            TranslationStyle::Yoda => self.translator.to_yoda(&pokemon.description).await,
            TranslationStyle::Shakespeare => {
                self.translator.to_shakespeare(&pokemon.description).await
            }
        };

        match translated {
            Ok(description) => description,
            Err(err) => {
                warn!(%style, error = %err, "failed to translate; defaulting description");
                pokemon.description.clone()
            }
        }
    }
}
