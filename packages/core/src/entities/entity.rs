use serde::{de::DeserializeOwned, Serialize};

use super::{descriptor::EntityDescriptor, entity_key::EntityKey};
use crate::errors::configuration_error::ConfigurationError;

/**
 * Type persisted as one document per value
 *
 * The key is serialized as the `_id` field. Types declare their collection
 * metadata through `descriptor`, which defaults to a bare type named after
 * the Rust type
 */
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    type Key: EntityKey;

    fn id(&self) -> Option<Self::Key>;

    fn set_id(&mut self, id: Self::Key);

    /**
     * Static metadata, built once and cached by the resolver
     */
    fn descriptor() -> Result<EntityDescriptor, ConfigurationError> {
        EntityDescriptor::builder_for::<Self>().build()
    }
}
