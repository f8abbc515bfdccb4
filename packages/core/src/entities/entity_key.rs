use std::fmt::Debug;

use polodb_core::bson::{oid::ObjectId, Bson};

/**
 * Primary key of an entity, stored in the `_id` field
 */
pub trait EntityKey: Clone + Debug + PartialEq + Send + Sync + Into<Bson> + 'static {
    /**
     * Read key back from a stored `_id` value
     */
    fn from_bson(value: Bson) -> Option<Self>;

    /**
     * Whether the store generates this key when a document is inserted without one
     */
    fn store_assigned() -> bool {
        false
    }
}

impl EntityKey for ObjectId {
    fn from_bson(value: Bson) -> Option<Self> {
        match value {
            Bson::ObjectId(oid) => Some(oid),
            _ => None,
        }
    }

    fn store_assigned() -> bool {
        true
    }
}

impl EntityKey for String {
    fn from_bson(value: Bson) -> Option<Self> {
        match value {
            Bson::String(key) => Some(key),
            _ => None,
        }
    }
}

impl EntityKey for i64 {
    fn from_bson(value: Bson) -> Option<Self> {
        match value {
            Bson::Int64(key) => Some(key),
            Bson::Int32(key) => Some(i64::from(key)),
            _ => None,
        }
    }
}

impl EntityKey for i32 {
    fn from_bson(value: Bson) -> Option<Self> {
        match value {
            Bson::Int32(key) => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_is_store_assigned() {
        assert!(ObjectId::store_assigned());
        assert!(!String::store_assigned());
        assert!(!i64::store_assigned());
    }

    #[test]
    fn test_should_read_object_id_back() {
        let oid = ObjectId::new();

        assert_eq!(ObjectId::from_bson(Bson::ObjectId(oid)), Some(oid));
        assert_eq!(ObjectId::from_bson(Bson::String(oid.to_hex())), None);
    }

    /**
     * It should widen stored 32 bits integers for 64 bits keys
     */
    #[test]
    fn test_should_widen_int32_keys() {
        assert_eq!(i64::from_bson(Bson::Int32(42)), Some(42));
        assert_eq!(i32::from_bson(Bson::Int64(42)), None);
    }

    #[test]
    fn test_should_not_read_string_from_object_id() {
        assert_eq!(String::from_bson(Bson::ObjectId(ObjectId::new())), None);
    }
}
