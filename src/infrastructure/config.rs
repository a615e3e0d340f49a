//! Application configuration

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the local persistence slot (a single JSON file)
    pub sheet_path: PathBuf,

    /// Remote sheet store endpoint URL; None leaves the app local-only
    pub remote_url: Option<String>,
    /// Remote sheet store access key
    pub remote_key: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// The remote pair is optional by design: a missing URL or key degrades
    /// to local-only operation, never an error.
    pub fn from_env() -> Self {
        Self {
            sheet_path: env::var("CHARBLDR_SHEET_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("character.json")),
            remote_url: env::var("CHARBLDR_REMOTE_URL").ok().filter(|v| !v.is_empty()),
            remote_key: env::var("CHARBLDR_REMOTE_KEY").ok().filter(|v| !v.is_empty()),
        }
    }

    /// The remote endpoint and key, when both are present
    pub fn remote(&self) -> Option<(&str, &str)> {
        self.remote_url.as_deref().zip(self.remote_key.as_deref())
    }
}
