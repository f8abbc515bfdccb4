use super::{
    collection_name::CollectionName,
    descriptor::{BaseType, EntityDescriptor},
};
use crate::errors::configuration_error::ConfigurationError;

#[derive(Debug, Default)]
pub struct EntityDescriptorBuilder {
    type_name: Option<String>,
    collection_name: Option<CollectionName>,
    base_type_chain: Vec<BaseType>,
}

impl EntityDescriptorBuilder {
    /**
     * Set type name
     */
    pub fn set_type_name(&mut self, type_name: &str) -> &mut Self {
        self.type_name = Some(type_name.to_string());

        self
    }

    /**
     * Declare collection name override
     */
    pub fn set_collection_name(&mut self, collection_name: CollectionName) -> &mut Self {
        self.collection_name = Some(collection_name);

        self
    }

    /**
     * Set immediate parent, inheriting its whole chain
     */
    pub fn set_parent(&mut self, parent: &EntityDescriptor) -> &mut Self {
        let mut chain = Vec::with_capacity(parent.base_type_chain.len() + 1);

        chain.push(parent.as_base_type());
        chain.extend(parent.base_type_chain.iter().cloned());

        self.base_type_chain = chain;

        self
    }

    /**
     * Make the type a direct child of the persisted entity marker
     */
    pub fn set_entity_root(&mut self) -> &mut Self {
        self.base_type_chain = vec![BaseType::Marker];

        self
    }

    /**
     * Reset builder
     */
    pub fn reset(&mut self) -> &mut Self {
        self.type_name = None;
        self.collection_name = None;
        self.base_type_chain = Vec::new();

        self
    }

    /**
     * Build descriptor
     */
    pub fn build(&mut self) -> Result<EntityDescriptor, ConfigurationError> {
        let type_name = self
            .type_name
            .take()
            .ok_or(ConfigurationError::MissingSetting("type_name"))?;

        let descriptor = EntityDescriptor {
            type_name,
            collection_name: self.collection_name.take(),
            base_type_chain: std::mem::take(&mut self.base_type_chain),
        };

        self.reset();

        Ok(descriptor)
    }
}
