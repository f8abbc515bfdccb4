use std::path::PathBuf;

use polodb_core::bson::Bson;
use thiserror::Error;

use super::configuration_error::ConfigurationError;

/**
 * Failures surfaced by repositories and the store client
 */
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Fatal to the repository being built; nothing is retried.
    #[error("Could not connect to document store at {location}")]
    Connection {
        location: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Store failures are passed through untouched.
    #[error(transparent)]
    StoreOperation(#[from] polodb_core::Error),

    #[error("Could not serialize entity: {0}")]
    Serialization(#[from] polodb_core::bson::ser::Error),

    #[error("Entity stored in collection {0} requires a caller supplied key")]
    MissingKey(String),

    #[error("Store assigned key {0} does not match the entity key type")]
    UnexpectedKey(Bson),
}
