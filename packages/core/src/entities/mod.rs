pub mod collection_name;
pub mod descriptor;
pub mod descriptor_builder;
pub mod entity;
pub mod entity_key;
