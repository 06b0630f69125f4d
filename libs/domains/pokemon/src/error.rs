use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the species or translation upstreams.
#[derive(Debug, Error)]
pub enum PokemonError {
    /// Connection, timeout or body read failure
    #[error("error sending request: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream answered with a status other than the expected one
    #[error("invalid response code: {0}")]
    Status(StatusCode),

    /// The success body did not have the expected shape
    #[error("error unmarshaling response: {0}")]
    Format(#[from] serde_json::Error),

    /// A collaborator was wired with unusable settings
    #[error("{0}: invalid configuration")]
    InvalidConfiguration(String),
}

impl PokemonError {
    /// Network failures and unexpected statuses.
    pub fn is_transport(&self) -> bool {
        matches!(self, PokemonError::Request(_) | PokemonError::Status(_))
    }
}

pub type PokemonResult<T> = Result<T, PokemonError>;
