use crate::errors::repository_error::RepositoryError;

/**
 * CRUD access to entities of type T keyed by K
 *
 * Store failures are returned as they come, nothing is retried
 */
#[async_trait::async_trait]
pub trait Repository<T, K>: Send + Sync
where
    T: Send + 'static,
    K: Send + Sync + 'static,
{
    type Cursor: Iterator<Item = Result<T, RepositoryError>>;

    /// `None` when nothing is stored under key.
    async fn get_by_id(&self, key: &K) -> Result<Option<T>, RepositoryError>;

    /// Lazy, single pass.
    async fn get_all(&self) -> Result<Self::Cursor, RepositoryError>;

    async fn add(&self, document: T) -> Result<T, RepositoryError>;

    /// Replaces the document with the same key, inserting it when missing.
    async fn update(&self, document: T) -> Result<T, RepositoryError>;

    /// Deleting an unknown key is a no-op.
    async fn delete(&self, key: &K) -> Result<(), RepositoryError>;

    async fn exists(&self, key: &K) -> Result<bool, RepositoryError> {
        let document = self.get_by_id(key).await?;

        Ok(document.is_some())
    }
}
