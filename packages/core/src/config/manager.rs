use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::PathBuf,
};

use config::{Config, Environment, FileFormat};
use log::debug;

use super::db_settings::DbSettings;
use crate::errors::configuration_error::ConfigurationError;

const CONFIG_FILENAME: &str = "config.json";

const DB_DIR_NAME: &str = "db";

const DEFAULT_DATABASE_NAME: &str = "docrepo";

/// Environment variables override file values, e.g. `DOCREPO_DATABASE_NAME`.
pub const DEFAULT_ENV_PREFIX: &str = "DOCREPO";

/**
 * Configuration manager
 *
 * Owns the config directory, writes defaults on first use and loads database settings
 */
pub struct ConfigManager {
    path: PathBuf,
    env_prefix: String,
}

impl ConfigManager {
    /**
     * Create config file at given path
     */
    fn create_config_file(path: &PathBuf, defaults: &DbSettings) -> Result<File, ConfigurationError> {
        let path_display = path.display().to_string();

        debug!("Creating config file at {}...", path_display);

        if let Some(dir_path) = path.parent() {
            create_dir_all(dir_path)?;
        }

        let file = File::create_new(path)?;

        ConfigManager::write_default_config(&file, defaults)?;

        debug!("Done writing config file at {} !", path_display);

        Ok(file)
    }

    /**
     * Write default config values to given file
     */
    fn write_default_config(file: &File, defaults: &DbSettings) -> Result<(), ConfigurationError> {
        debug!("Writing default config values...");

        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, defaults)?;

        writer.flush()?;

        debug!("Done writing default config values !");

        Ok(())
    }

    /**
     * Default settings, databases live next to the config file
     */
    fn default_settings(directory_path: &PathBuf) -> DbSettings {
        let db_path = directory_path.join(DB_DIR_NAME);

        DbSettings::new(DEFAULT_DATABASE_NAME, &db_path.display().to_string())
    }

    /**
     * Instantiate ConfigManager while making sure config file exists
     */
    pub fn init(directory_path: &PathBuf) -> Result<Self, ConfigurationError> {
        debug!(
            "Building ConfigManager using path {}...",
            directory_path.display()
        );

        let config_file_path = directory_path.join(CONFIG_FILENAME);

        if !config_file_path.exists() {
            debug!("Config file could not be found, creating one...");

            let defaults = ConfigManager::default_settings(directory_path);

            ConfigManager::create_config_file(&config_file_path, &defaults)?;

            debug!("Done creating config file !");
        }

        let manager = ConfigManager {
            path: directory_path.clone(),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        };

        debug!(
            "Done building ConfigManager using path {} !",
            directory_path.display()
        );

        Ok(manager)
    }

    /**
     * Use another prefix for environment overrides
     */
    pub fn with_env_prefix(mut self, env_prefix: &str) -> Self {
        self.env_prefix = env_prefix.to_string();

        self
    }

    /**
     * Load database settings from config file, then environment
     */
    pub fn load_settings(&self) -> Result<DbSettings, ConfigurationError> {
        debug!("Loading database settings...");

        let config_file_path = self.get_config_file_path();

        let config = Config::builder()
            .add_source(config::File::new(
                &config_file_path.display().to_string(),
                FileFormat::Json,
            ))
            .add_source(Environment::with_prefix(&self.env_prefix))
            .build()?;

        let settings: DbSettings = config.try_deserialize()?;

        settings.validate()?;

        debug!("Done loading database settings !");

        Ok(settings)
    }

    /**
     * Get config dir path
     */
    pub fn get_path(&self) -> PathBuf {
        self.path.clone()
    }

    pub fn get_config_file_path(&self) -> PathBuf {
        self.path.join(CONFIG_FILENAME)
    }

    /**
     * Get default databases directory
     */
    pub fn get_db_path(&self) -> PathBuf {
        self.path.join(DB_DIR_NAME)
    }
}
