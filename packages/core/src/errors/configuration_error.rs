use thiserror::Error;

/**
 * Misconfiguration detected while declaring entities or wiring repositories
 *
 * Always raised eagerly, at the point where the bad value is declared
 */
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Collection name cannot be empty for entity {0}")]
    EmptyCollectionName(String),

    #[error("Empty collection name is not allowed")]
    BlankCollectionOverride,

    #[error("Required setting {0} is missing or empty")]
    MissingSetting(&'static str),

    #[error("Connection string {0} is not valid: {1}")]
    InvalidConnectionString(String, String),

    #[error("Connection string scheme {0} is not supported, expected polodb or file")]
    UnsupportedScheme(String),

    #[error("Could not load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Could not access config file: {0}")]
    ConfigFile(#[from] std::io::Error),

    #[error("Could not write default config: {0}")]
    DefaultConfig(#[from] serde_json::Error),
}
