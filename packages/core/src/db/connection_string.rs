use std::path::PathBuf;

use url::Url;

use crate::{config::db_settings::DbSettings, errors::configuration_error::ConfigurationError};

const POLODB_SCHEME: &str = "polodb";

const FILE_SCHEME: &str = "file";

/**
 * On disk location of a database
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLocation {
    pub root: PathBuf,
    pub database_name: String,
}

impl StoreLocation {
    /**
     * Location from settings, database opened below the connection string directory
     */
    pub fn from_settings(settings: &DbSettings) -> Result<Self, ConfigurationError> {
        settings.validate()?;

        let root = match Url::parse(&settings.connection_string) {
            Ok(url) if is_drive_letter(url.scheme()) => {
                PathBuf::from(&settings.connection_string)
            }
            Ok(url) => directory_from_url(&url)?,
            Err(_) => PathBuf::from(&settings.connection_string),
        };

        Ok(Self {
            root,
            database_name: settings.database_name.clone(),
        })
    }

    /**
     * Location from raw URI, the last path segment being the database name
     */
    pub fn from_url(url: &Url) -> Result<Self, ConfigurationError> {
        let database_path = directory_from_url(url)?;

        let database_name = database_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .filter(|name| !name.trim().is_empty())
            .ok_or(ConfigurationError::MissingSetting("database_name"))?;

        let root = database_path
            .parent()
            .map(PathBuf::from)
            .ok_or(ConfigurationError::MissingSetting("database_name"))?;

        Ok(Self {
            root,
            database_name,
        })
    }

    pub fn get_database_path(&self) -> PathBuf {
        self.root.join(&self.database_name)
    }
}

/**
 * Windows paths such as `C:\data` parse as URLs with a one letter scheme
 */
fn is_drive_letter(scheme: &str) -> bool {
    scheme.len() == 1
}

fn directory_from_url(url: &Url) -> Result<PathBuf, ConfigurationError> {
    let file_url = match url.scheme() {
        FILE_SCHEME => url.clone(),
        POLODB_SCHEME => {
            let without_scheme = &url.as_str()[POLODB_SCHEME.len() + 1..];

            Url::parse(&format!("{}:{}", FILE_SCHEME, without_scheme)).map_err(|err| {
                ConfigurationError::InvalidConnectionString(url.to_string(), err.to_string())
            })?
        }
        scheme => return Err(ConfigurationError::UnsupportedScheme(scheme.to_string())),
    };

    file_url.to_file_path().map_err(|_| {
        ConfigurationError::InvalidConnectionString(
            url.to_string(),
            "expected an absolute local path".to_string(),
        )
    })
}
