//! Generic repositories over an embedded document database.
//!
//! Entities declare their collection metadata once through
//! [`entities::entity::Entity::descriptor`]. Collection names are then resolved by
//! [`naming::resolver::NameResolver`] and every CRUD call goes straight to the store
//! through [`services::db::document_repository::DocumentRepository`].

pub use polodb_core::bson;

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod logging;
pub mod naming;
pub mod services;
pub mod utils;

mod test_utils;
