use serde::{Deserialize, Serialize};

use crate::errors::configuration_error::ConfigurationError;

/**
 * Where repositories find their database
 *
 * `connection_string` is either a directory path or a `polodb://` / `file://` URI
 * pointing at one. `database_name` is opened below it
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub database_name: String,
    pub connection_string: String,
}

impl DbSettings {
    pub fn new(database_name: &str, connection_string: &str) -> Self {
        Self {
            database_name: database_name.to_string(),
            connection_string: connection_string.to_string(),
        }
    }

    /**
     * Make sure both settings are present
     */
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.database_name.trim().is_empty() {
            return Err(ConfigurationError::MissingSetting("database_name"));
        }

        if self.connection_string.trim().is_empty() {
            return Err(ConfigurationError::MissingSetting("connection_string"));
        }

        Ok(())
    }
}
