//! Supabase REST adapter for the remote sheet table
//!
//! The collaborator is a single table named `characters`; each row holds a
//! full serialized character under `data` plus a creation timestamp. The
//! only operations are insert-row and select-most-recent-row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::application::ports::outbound::{RemoteSheetPort, RemoteStoreError};
use crate::domain::entities::Character;

const TABLE: &str = "characters";

/// Client for the Supabase `characters` table
pub struct SupabaseSheets {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseSheets {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TABLE)
    }
}

#[derive(Debug, Deserialize)]
struct SheetRow {
    data: serde_json::Value,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl RemoteSheetPort for SupabaseSheets {
    async fn publish(&self, character: &Character) -> Result<(), RemoteStoreError> {
        let body = serde_json::json!([{ "data": character }]);

        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(RemoteStoreError::Api(error_text));
        }
        Ok(())
    }

    async fn fetch_latest(&self) -> Result<Option<Character>, RemoteStoreError> {
        let response = self
            .client
            .get(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[
                ("select", "data,created_at"),
                ("order", "created_at.desc"),
                ("limit", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(RemoteStoreError::Api(error_text));
        }

        let rows: Vec<SheetRow> = response.json().await?;
        match rows.into_iter().next() {
            Some(row) => {
                debug!(created_at = %row.created_at, "fetched newest remote record");
                let character = serde_json::from_value(row.data)?;
                Ok(Some(character))
            }
            None => Ok(None),
        }
    }
}
