//! JSON-file product store for generated catalog records.
//!
//! The store is a deliberately simple collaborator: one JSON document
//! holding the full array of records ever generated. The composition
//! engine hands it complete, immutable record lists and never observes
//! store failures itself.

mod error;
mod store;

pub use error::StoreError;
pub use store::ProductStore;
