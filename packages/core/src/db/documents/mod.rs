pub mod raw_document;
