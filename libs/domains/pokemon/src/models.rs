use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Habitat whose residents are always described in the Yoda style.
pub const CAVE_HABITAT: &str = "cave";

/// A creature as served by the API.
///
/// Built from the species upstream; the description is a single paragraph
/// with no `\n` or `\f` characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Pokemon {
    /// Species name, lower-cased by the upstream
    pub name: String,
    /// English flavor text, or empty when the species has none
    pub description: String,
    /// Habitat category such as "cave", "rare" or "urban"; may be empty
    pub habitat: String,
    /// Whether the species is legendary
    pub is_legendary: bool,
}

/// Stylized rewrite applied to a description.
///
/// The string form is the path segment of the translation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TranslationStyle {
    Yoda,
    Shakespeare,
}

impl TranslationStyle {
    /// Legendary species and cave dwellers get Yoda, everyone else Shakespeare.
    pub fn for_pokemon(pokemon: &Pokemon) -> Self {
        if pokemon.is_legendary || pokemon.habitat == CAVE_HABITAT {
            TranslationStyle::Yoda
        } else {
            TranslationStyle::Shakespeare
        }
    }
}
