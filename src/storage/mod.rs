//! Local persistence for the roster dataset.

pub mod json_backend;

pub use json_backend::JsonStorage;

pub type Result<T> = std::result::Result<T, crate::errors::StoreError>;
