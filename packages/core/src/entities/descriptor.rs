use super::{collection_name::CollectionName, descriptor_builder::EntityDescriptorBuilder};
use crate::utils::type_name::simple_type_name;

/// Display name of the persisted entity marker closing an entity family chain.
pub const MARKER_TYPE_NAME: &str = "Entity";

/**
 * Link of an entity parent chain
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseType {
    Type {
        type_name: String,
        collection_name: Option<CollectionName>,
    },
    /// Persisted entity marker, always the last link when present.
    Marker,
}

/**
 * Static metadata of an entity type
 *
 * Immutable once built. The parent chain is copied from already built parent
 * descriptors so it is always finite and acyclic
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescriptor {
    pub(crate) type_name: String,
    pub(crate) collection_name: Option<CollectionName>,
    pub(crate) base_type_chain: Vec<BaseType>,
}

impl EntityDescriptor {
    /**
     * Return associated builder
     */
    pub fn builder() -> EntityDescriptorBuilder {
        EntityDescriptorBuilder::default()
    }

    /**
     * Return builder with type name taken from given Rust type
     */
    pub fn builder_for<T: ?Sized>() -> EntityDescriptorBuilder {
        let mut builder = EntityDescriptorBuilder::default();

        builder.set_type_name(simple_type_name::<T>());

        builder
    }

    pub fn get_type_name(&self) -> &str {
        &self.type_name
    }

    /**
     * Override declared directly on this type
     */
    pub fn get_collection_name(&self) -> Option<&CollectionName> {
        self.collection_name.as_ref()
    }

    /**
     * Parents from the immediate one up to the root
     */
    pub fn get_base_type_chain(&self) -> &[BaseType] {
        &self.base_type_chain
    }

    /**
     * Whether the type belongs to a persisted entity family
     */
    pub fn is_persisted_entity(&self) -> bool {
        matches!(self.base_type_chain.last(), Some(BaseType::Marker))
    }

    pub(crate) fn as_base_type(&self) -> BaseType {
        BaseType::Type {
            type_name: self.type_name.clone(),
            collection_name: self.collection_name.clone(),
        }
    }
}
