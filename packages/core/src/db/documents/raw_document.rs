use polodb_core::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::entities::entity::Entity;

const ID_FIELD: &str = "_id";

/**
 * Schema-less document
 *
 * Used when the collection is only known at runtime, keys are store assigned object ids
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct RawDocument(pub Document);

impl RawDocument {
    pub fn into_inner(self) -> Document {
        self.0
    }
}

impl From<Document> for RawDocument {
    fn from(value: Document) -> Self {
        Self(value)
    }
}

impl Entity for RawDocument {
    type Key = ObjectId;

    fn id(&self) -> Option<ObjectId> {
        self.0.get_object_id(ID_FIELD).ok()
    }

    fn set_id(&mut self, id: ObjectId) {
        self.0.insert(ID_FIELD, id);
    }
}

#[cfg(test)]
mod tests {
    use polodb_core::bson::doc;

    use super::*;

    #[test]
    fn test_raw_document_without_id() {
        let document = RawDocument::from(doc! { "title": "Dune" });

        assert_eq!(document.id(), None);
    }

    #[test]
    fn test_raw_document_set_id() {
        let mut document = RawDocument::from(doc! { "title": "Dune" });

        let expected_id = ObjectId::new();

        document.set_id(expected_id);

        assert_eq!(document.id(), Some(expected_id));
        assert_eq!(document.into_inner().get_str("title").unwrap(), "Dune");
    }

    /**
     * It should not read string ids as object ids
     */
    #[test]
    fn test_raw_document_with_string_id() {
        let document = RawDocument::from(doc! { "_id": "dune" });

        assert_eq!(document.id(), None);
    }
}
