use std::{
    collections::HashMap,
    fmt,
    fs::{self, create_dir_all},
    path::{Path, PathBuf},
    sync::{Arc, LazyLock, Weak},
};

use log::debug;
use parking_lot::Mutex;
use polodb_core::{Collection, Database, Transaction};
use url::Url;

use super::connection_string::StoreLocation;
use crate::{config::db_settings::DbSettings, errors::repository_error::RepositoryError};

/// Open databases by path. An embedded store cannot open one location twice, so
/// clients are shared for as long as someone holds them.
static OPEN_CLIENTS: LazyLock<Mutex<HashMap<PathBuf, Weak<DbClient>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/**
 * Shared handle on an open database
 *
 * The underlying database is safe for concurrent use, no locking happens here
 */
pub struct DbClient {
    database_path: PathBuf,
    database_name: String,
    instance: Database,
}

impl DbClient {
    /**
     * Connect using settings
     */
    pub fn connect(settings: &DbSettings) -> Result<Arc<Self>, RepositoryError> {
        let location = StoreLocation::from_settings(settings)?;

        DbClient::open(&location)
    }

    /**
     * Connect using raw URI, database name being its last segment
     */
    pub fn connect_url(url: &Url) -> Result<Arc<Self>, RepositoryError> {
        let location = StoreLocation::from_url(url)?;

        DbClient::open(&location)
    }

    /**
     * Open database at location or reuse the client already holding it
     */
    pub fn open(location: &StoreLocation) -> Result<Arc<Self>, RepositoryError> {
        debug!(
            "Connecting to database {} in {}...",
            location.database_name,
            location.root.display()
        );

        let connection_error = |source: Box<dyn std::error::Error + Send + Sync>| {
            RepositoryError::Connection {
                location: location.get_database_path(),
                source,
            }
        };

        create_dir_all(&location.root).map_err(|err| connection_error(Box::new(err)))?;

        let root = fs::canonicalize(&location.root).map_err(|err| connection_error(Box::new(err)))?;

        let database_path = root.join(&location.database_name);

        let mut open_clients = OPEN_CLIENTS.lock();

        if let Some(client) = open_clients.get(&database_path).and_then(Weak::upgrade) {
            debug!(
                "Done connecting to database {}, reusing open client !",
                location.database_name
            );

            return Ok(client);
        }

        let instance =
            Database::open_path(&database_path).map_err(|err| connection_error(Box::new(err)))?;

        let client = Arc::new(Self {
            database_path: database_path.clone(),
            database_name: location.database_name.clone(),
            instance,
        });

        open_clients.retain(|_, client| client.strong_count() > 0);
        open_clients.insert(database_path, Arc::downgrade(&client));

        debug!("Done connecting to database {} !", location.database_name);

        Ok(client)
    }

    /**
     * Get typed collection handle
     */
    pub fn collection<T: Send + Sync>(&self, collection_name: &str) -> Collection<T> {
        self.instance.collection(collection_name)
    }

    /**
     * Start transaction, rolled back unless committed
     */
    pub fn start_transaction(&self) -> Result<Transaction, RepositoryError> {
        let transaction = self.instance.start_transaction()?;

        Ok(transaction)
    }

    pub fn get_database_name(&self) -> &str {
        &self.database_name
    }

    /**
     * Canonical on disk path of the open database
     */
    pub fn get_database_path(&self) -> &Path {
        &self.database_path
    }
}

impl fmt::Debug for DbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbClient")
            .field("database_path", &self.database_path)
            .field("database_name", &self.database_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::TempDir;

    use super::*;
    use crate::errors::configuration_error::ConfigurationError;

    /**
     * It should open database below connection string directory
     */
    #[test]
    fn test_connect_with_settings() {
        let test_dir = TempDir::new().unwrap();

        let settings = DbSettings::new("library", &test_dir.path().display().to_string());

        let client = DbClient::connect(&settings).unwrap();

        assert_eq!(client.get_database_name(), "library");
        assert!(client.get_database_path().ends_with("library"));
        assert!(client.get_database_path().exists());
    }

    /**
     * It should share open client for the same location
     */
    #[test]
    fn test_connect_twice_shares_client() {
        let test_dir = TempDir::new().unwrap();

        let settings = DbSettings::new("library", &test_dir.path().display().to_string());

        let first = DbClient::connect(&settings).unwrap();
        let second = DbClient::connect(&settings).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_connect_with_url() {
        let test_dir = TempDir::new().unwrap();

        let url = Url::from_directory_path(test_dir.path())
            .unwrap()
            .join("books")
            .unwrap();

        let client = DbClient::connect_url(&url).unwrap();

        assert_eq!(client.get_database_name(), "books");
    }

    /**
     * It should surface connection failures with their cause
     */
    #[test]
    fn test_connect_failure() {
        let test_dir = TempDir::new().unwrap();

        let not_a_directory = test_dir.path().join("occupied");

        File::create(&not_a_directory).unwrap();

        let settings = DbSettings::new("library", &not_a_directory.display().to_string());

        let result = DbClient::connect(&settings);

        assert!(matches!(
            result,
            Err(RepositoryError::Connection { location, .. }) if location.ends_with("library")
        ));
    }

    #[test]
    fn test_connect_rejects_invalid_settings() {
        let settings = DbSettings::new("library", "mongodb://localhost:27017");

        let result = DbClient::connect(&settings);

        assert!(matches!(
            result,
            Err(RepositoryError::Configuration(
                ConfigurationError::UnsupportedScheme(_)
            ))
        ));
    }
}
