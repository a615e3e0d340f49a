//! Local persistence adapters

mod local_store;

pub use local_store::JsonFileStore;
