//! Outbound ports - Interfaces that the application requires from external systems

mod sheet_store_port;

pub use sheet_store_port::{CharacterStorePort, RemoteSheetPort, RemoteStoreError};
