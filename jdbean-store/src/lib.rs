#![forbid(unsafe_code)]

pub mod json_file;
pub mod store;

pub use crate::json_file::JsonFileStore;
pub use crate::store::{CredentialStore, StoreError};
