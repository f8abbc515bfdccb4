use polodb_core::ClientCursor;

use crate::{entities::entity::Entity, errors::repository_error::RepositoryError};

/**
 * Lazy, single pass sequence of stored entities
 *
 * Documents are pulled from the store one at a time. Run the query again to restart
 */
pub struct EntityCursor<T: Entity> {
    inner: ClientCursor<T>,
}

impl<T: Entity> EntityCursor<T> {
    pub(crate) fn new(inner: ClientCursor<T>) -> Self {
        Self { inner }
    }
}

impl<T: Entity> Iterator for EntityCursor<T> {
    type Item = Result<T, RepositoryError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|document| document.map_err(RepositoryError::from))
    }
}
