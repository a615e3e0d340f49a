//! Store ports - the local slot and the remote sheet table
//!
//! Application services depend on these traits, not on the file or HTTP
//! adapters behind them.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::Character;

/// Port for the single local persistence slot
///
/// The slot holds at most one serialized character; consumers read and
/// write the whole record every time.
pub trait CharacterStorePort: Send + Sync {
    /// Read the persisted record. An absent or unparseable slot yields the
    /// default character; no error surfaces to the caller.
    fn load(&self) -> Character;

    /// Serialize the full record into the slot, overwriting any prior value
    fn save(&self, character: &Character) -> Result<()>;
}

/// Errors from the remote sheet table, kept distinct so each condition can
/// be reported to the user as its own actionable message
#[derive(Debug, thiserror::Error)]
pub enum RemoteStoreError {
    #[error("remote sheet store is not configured; set CHARBLDR_REMOTE_URL and CHARBLDR_REMOTE_KEY")]
    Unconfigured,
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("remote store rejected the request: {0}")]
    Api(String),
    #[error("remote record did not decode: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Port for the remote single-table collaborator
///
/// Rows hold a full serialized character plus a creation timestamp; the
/// only reads are insert-row and select-most-recent-row.
#[async_trait]
pub trait RemoteSheetPort: Send + Sync {
    /// Insert the full serialized character as a new row
    async fn publish(&self, character: &Character) -> Result<(), RemoteStoreError>;

    /// Retrieve the most recently published record, newest first.
    /// `Ok(None)` is the distinct "nothing to load" condition.
    async fn fetch_latest(&self) -> Result<Option<Character>, RemoteStoreError>;
}
