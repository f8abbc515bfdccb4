use std::sync::Arc;

use log::debug;
use polodb_core::{
    bson::{doc, Bson, Document},
    Collection, CollectionT,
};
use url::Url;

use super::cursor::EntityCursor;
use crate::{
    config::db_settings::DbSettings,
    db::{client::DbClient, traits::repository::Repository},
    entities::{collection_name::CollectionName, entity::Entity, entity_key::EntityKey},
    errors::repository_error::RepositoryError,
    naming::resolver::NameResolver,
};

/**
 * Repository for any entity type
 *
 * Collection name comes from the resolver unless given explicitly. The database client is
 * shared with every other repository on the same database
 */
pub struct DocumentRepository<T: Entity> {
    client: Arc<DbClient>,
    collection_name: String,
    collection: Collection<T>,
}

impl<T: Entity> DocumentRepository<T> {
    fn new(client: Arc<DbClient>, collection_name: String) -> Self {
        let collection = client.collection::<T>(&collection_name);

        debug!(
            "Opened repository on {} in {}",
            collection_name,
            client.get_database_path().display()
        );

        Self {
            client,
            collection_name,
            collection,
        }
    }

    /**
     * Build from settings, collection named after the entity type
     */
    pub fn from_settings(settings: &DbSettings) -> Result<Self, RepositoryError> {
        let collection_name = NameResolver::resolve_entity::<T>()?;

        let client = DbClient::connect(settings)?;

        Ok(Self::new(client, collection_name))
    }

    /**
     * Build from settings using given collection
     */
    pub fn from_settings_with_collection(
        settings: &DbSettings,
        collection_name: &str,
    ) -> Result<Self, RepositoryError> {
        let collection_name = CollectionName::new(collection_name)?;

        let client = DbClient::connect(settings)?;

        Ok(Self::new(client, collection_name.into()))
    }

    /**
     * Build from raw URI, collection named after the entity type
     */
    pub fn from_url(url: &Url) -> Result<Self, RepositoryError> {
        let collection_name = NameResolver::resolve_entity::<T>()?;

        let client = DbClient::connect_url(url)?;

        Ok(Self::new(client, collection_name))
    }

    /**
     * Build from raw URI using given collection
     */
    pub fn from_url_with_collection(
        url: &Url,
        collection_name: &str,
    ) -> Result<Self, RepositoryError> {
        let collection_name = CollectionName::new(collection_name)?;

        let client = DbClient::connect_url(url)?;

        Ok(Self::new(client, collection_name.into()))
    }

    /**
     * Build on top of an already connected client
     */
    pub fn from_client(client: &Arc<DbClient>) -> Result<Self, RepositoryError> {
        let collection_name = NameResolver::resolve_entity::<T>()?;

        Ok(Self::new(Arc::clone(client), collection_name))
    }

    pub fn from_client_with_collection(
        client: &Arc<DbClient>,
        collection_name: &str,
    ) -> Result<Self, RepositoryError> {
        let collection_name = CollectionName::new(collection_name)?;

        Ok(Self::new(Arc::clone(client), collection_name.into()))
    }

    pub fn get_collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn get_client(&self) -> &Arc<DbClient> {
        &self.client
    }

    /**
     * Typed collection handle, for operations this repository does not cover
     */
    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    fn key_filter(key: &T::Key) -> Document {
        let id: Bson = key.clone().into();

        doc! { "_id": id }
    }
}

#[async_trait::async_trait]
impl<T: Entity> Repository<T, T::Key> for DocumentRepository<T> {
    type Cursor = EntityCursor<T>;

    async fn get_by_id(&self, key: &T::Key) -> Result<Option<T>, RepositoryError> {
        debug!(
            "Searching {:?} in {} using key...",
            key, self.collection_name
        );

        let document = self.collection.find_one(Self::key_filter(key))?;

        debug!(
            "Done searching {:?} in {} using key ! (found: {})",
            key,
            self.collection_name,
            document.is_some()
        );

        Ok(document)
    }

    async fn get_all(&self) -> Result<EntityCursor<T>, RepositoryError> {
        debug!("Reading all documents from {}...", self.collection_name);

        let cursor = self.collection.find(doc! {}).run()?;

        debug!("Done opening cursor on {} !", self.collection_name);

        Ok(EntityCursor::new(cursor))
    }

    async fn add(&self, mut document: T) -> Result<T, RepositoryError> {
        debug!("Adding new document to {}...", self.collection_name);

        let key_missing = document.id().is_none();

        if key_missing && !T::Key::store_assigned() {
            return Err(RepositoryError::MissingKey(self.collection_name.clone()));
        }

        let result = self.collection.insert_one(&document)?;

        if key_missing {
            let key = T::Key::from_bson(result.inserted_id.clone())
                .ok_or(RepositoryError::UnexpectedKey(result.inserted_id))?;

            document.set_id(key);
        }

        debug!("Done adding new document to {} !", self.collection_name);

        Ok(document)
    }

    async fn update(&self, document: T) -> Result<T, RepositoryError> {
        debug!("Updating document in {}...", self.collection_name);

        let key = document
            .id()
            .ok_or_else(|| RepositoryError::MissingKey(self.collection_name.clone()))?;

        // Whole document replaced, stale fields must not survive
        let transaction = self.client.start_transaction()?;

        let collection = transaction.collection::<T>(&self.collection_name);

        collection.delete_one(Self::key_filter(&key))?;
        collection.insert_one(&document)?;

        transaction.commit()?;

        debug!("Done updating document in {} !", self.collection_name);

        Ok(document)
    }

    async fn delete(&self, key: &T::Key) -> Result<(), RepositoryError> {
        debug!("Deleting {:?} from {}...", key, self.collection_name);

        self.collection.delete_one(Self::key_filter(key))?;

        debug!("Done deleting {:?} from {} !", key, self.collection_name);

        Ok(())
    }
}
