pub mod client;
pub mod connection_string;
pub mod documents;
pub mod traits;
