use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig, upstream::UpstreamConfig};

pub use core_config::Environment;

const DEFAULT_POKEAPI_URL: &str = "https://pokeapi.co";
const DEFAULT_FUNTRANSLATIONS_URL: &str = "https://api.funtranslations.com";

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub pokeapi: UpstreamConfig,
    pub funtranslations: UpstreamConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 unless set
        let pokeapi = UpstreamConfig::from_env_with_prefix("POKEAPI", DEFAULT_POKEAPI_URL)?;
        let funtranslations =
            UpstreamConfig::from_env_with_prefix("FUNTRANSLATIONS", DEFAULT_FUNTRANSLATIONS_URL)?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            pokeapi,
            funtranslations,
        })
    }
}
