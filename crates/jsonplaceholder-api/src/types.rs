//! Data types for JSONPlaceholder API responses

use serde::{Deserialize, Serialize};

/// A photo record from the `/photos` endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: u64,
    pub album_id: u64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}
