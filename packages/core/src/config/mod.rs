pub mod db_settings;
pub mod manager;

use std::path::PathBuf;

use log::debug;
use manager::ConfigManager;

use crate::errors::configuration_error::ConfigurationError;

/// Directory created under the given location to hold config and databases.
pub const CONFIG_DIR_NAME: &str = ".docrepo";

/**
 * Initialize configuration
 */
pub fn init_config(path: &PathBuf) -> Result<ConfigManager, ConfigurationError> {
    let path_display = path.display().to_string();

    debug!(
        "Initializing config file, provided location : {}",
        path_display
    );

    let config_path = path.join(CONFIG_DIR_NAME);

    let config_manager = ConfigManager::init(&config_path)?;

    debug!(
        "Done initializing config file using location {} !",
        path_display
    );

    Ok(config_manager)
}
