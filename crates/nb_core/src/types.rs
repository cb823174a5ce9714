use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news article as returned by the search service. Order within a
/// result set is the service's relevance order and is preserved downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub url: String,
    pub image_url: Option<String>,
}
