pub mod cursor;
pub mod document_repository;
