//! Infrastructure layer - adapters behind the application ports

pub mod config;
pub mod persistence;
pub mod remote;
