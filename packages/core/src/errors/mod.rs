pub mod configuration_error;
pub mod repository_error;
