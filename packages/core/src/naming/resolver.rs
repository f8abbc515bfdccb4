use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, LazyLock},
};

use log::debug;
use parking_lot::RwLock;

use crate::{
    entities::{
        descriptor::{BaseType, EntityDescriptor},
        entity::Entity,
    },
    errors::configuration_error::ConfigurationError,
};

/// Names resolved per entity type. Entries are written once and never replaced.
static RESOLVED_NAMES: LazyLock<RwLock<HashMap<TypeId, Arc<str>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/**
 * Maps entity types to collection names
 */
pub struct NameResolver;

impl NameResolver {
    /**
     * Resolve collection name from descriptor
     *
     * The nearest declared override along the type and its parents wins. Without one, members
     * of a persisted entity family share the name of the family root, the parent that sits
     * directly under the marker. Anything else is stored under its own type name
     */
    pub fn resolve(descriptor: &EntityDescriptor) -> Result<String, ConfigurationError> {
        debug!(
            "Resolving collection name for {}...",
            descriptor.get_type_name()
        );

        let collection_name = match Self::nearest_override(descriptor) {
            Some(collection_name) => collection_name.to_string(),
            None if descriptor.is_persisted_entity() => Self::family_root_name(descriptor),
            None => descriptor.get_type_name().to_string(),
        };

        if collection_name.trim().is_empty() {
            return Err(ConfigurationError::EmptyCollectionName(
                descriptor.get_type_name().to_string(),
            ));
        }

        debug!(
            "Done resolving collection name for {} ({}) !",
            descriptor.get_type_name(),
            collection_name
        );

        Ok(collection_name)
    }

    /**
     * Resolve collection name of entity type, once per process
     */
    pub fn resolve_entity<T: Entity>() -> Result<String, ConfigurationError> {
        let type_id = TypeId::of::<T>();

        if let Some(collection_name) = RESOLVED_NAMES.read().get(&type_id) {
            return Ok(collection_name.to_string());
        }

        let collection_name = Self::resolve(&T::descriptor()?)?;

        let mut resolved_names = RESOLVED_NAMES.write();

        // A concurrent caller may have won the race, keep its entry
        let cached = resolved_names
            .entry(type_id)
            .or_insert_with(|| Arc::from(collection_name.as_str()));

        Ok(cached.to_string())
    }

    fn nearest_override(descriptor: &EntityDescriptor) -> Option<&str> {
        if let Some(collection_name) = descriptor.get_collection_name() {
            return Some(collection_name.as_str());
        }

        descriptor
            .get_base_type_chain()
            .iter()
            .find_map(|base_type| match base_type {
                BaseType::Type {
                    collection_name: Some(collection_name),
                    ..
                } => Some(collection_name.as_str()),
                _ => None,
            })
    }

    fn family_root_name(descriptor: &EntityDescriptor) -> String {
        let family_root = descriptor
            .get_base_type_chain()
            .iter()
            .rev()
            .find_map(|base_type| match base_type {
                BaseType::Type { type_name, .. } => Some(type_name.as_str()),
                BaseType::Marker => None,
            });

        family_root
            .unwrap_or(descriptor.get_type_name())
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::collection_name::CollectionName,
        test_utils::entities::tests::{
            ArchivedBook, Author, Book, Comic, Hardcover, Journal, Magazine, Paperback, Periodical,
        },
    };

    /**
     * It should use bare type name for plain types
     */
    #[test]
    fn test_resolve_plain_type() {
        assert_eq!(NameResolver::resolve_entity::<Book>().unwrap(), "Book");
        assert_eq!(NameResolver::resolve_entity::<Author>().unwrap(), "Author");
    }

    /**
     * It should use declared override
     */
    #[test]
    fn test_resolve_override() {
        assert_eq!(
            NameResolver::resolve_entity::<ArchivedBook>().unwrap(),
            "books_archive"
        );
    }

    /**
     * It should keep own name for direct children of the marker
     */
    #[test]
    fn test_resolve_direct_marker_children() {
        assert_eq!(
            NameResolver::resolve_entity::<Hardcover>().unwrap(),
            "Hardcover"
        );
        assert_eq!(
            NameResolver::resolve_entity::<Paperback>().unwrap(),
            "Paperback"
        );
    }

    /**
     * It should store sibling subtypes under their family root
     */
    #[test]
    fn test_resolve_family_members() {
        assert_eq!(
            NameResolver::resolve_entity::<Periodical>().unwrap(),
            "Periodical"
        );
        assert_eq!(
            NameResolver::resolve_entity::<Magazine>().unwrap(),
            "Periodical"
        );
        assert_eq!(
            NameResolver::resolve_entity::<Journal>().unwrap(),
            "Periodical"
        );
        assert_eq!(
            NameResolver::resolve_entity::<Comic>().unwrap(),
            "Periodical"
        );
    }

    /**
     * It should let own override beat the hierarchy
     */
    #[test]
    fn test_override_wins_over_family_root() {
        let periodical = Periodical::descriptor().unwrap();

        let descriptor = EntityDescriptor::builder()
            .set_type_name("Newsletter")
            .set_collection_name(CollectionName::new("newsletters").unwrap())
            .set_parent(&periodical)
            .build()
            .unwrap();

        assert_eq!(NameResolver::resolve(&descriptor).unwrap(), "newsletters");
    }

    /**
     * It should inherit override declared on a parent
     */
    #[test]
    fn test_parent_override_is_inherited() {
        let catalogue = EntityDescriptor::builder()
            .set_type_name("Catalogue")
            .set_collection_name(CollectionName::new("catalogue").unwrap())
            .set_entity_root()
            .build()
            .unwrap();

        let entry = EntityDescriptor::builder()
            .set_type_name("CatalogueEntry")
            .set_parent(&catalogue)
            .build()
            .unwrap();

        assert_eq!(NameResolver::resolve(&entry).unwrap(), "catalogue");
    }

    /**
     * It should ignore parents when the chain does not reach the marker
     */
    #[test]
    fn test_unpersisted_parent_chain_uses_own_name() {
        let draft_base = EntityDescriptor::builder()
            .set_type_name("Document")
            .build()
            .unwrap();

        let draft = EntityDescriptor::builder()
            .set_type_name("Draft")
            .set_parent(&draft_base)
            .build()
            .unwrap();

        assert_eq!(NameResolver::resolve(&draft).unwrap(), "Draft");
    }

    /**
     * It should fail when resolved name is blank
     */
    #[test]
    fn test_resolve_blank_type_name() {
        let descriptor = EntityDescriptor::builder()
            .set_type_name("  ")
            .build()
            .unwrap();

        let result = NameResolver::resolve(&descriptor);

        assert!(matches!(
            result,
            Err(ConfigurationError::EmptyCollectionName(_))
        ));
    }

    /**
     * It should return the same name on every resolution
     */
    #[test]
    fn test_resolve_entity_is_memoized() {
        let first = NameResolver::resolve_entity::<Magazine>().unwrap();
        let second = NameResolver::resolve_entity::<Magazine>().unwrap();

        assert_eq!(first, second);
        assert!(RESOLVED_NAMES
            .read()
            .contains_key(&TypeId::of::<Magazine>()));
    }
}
