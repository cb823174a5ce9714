use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;

use nb_core::{Article, Error, NewsSource, Result};

pub const NEWSAPI_BASE_URL: &str = "https://newsapi.org/v2";

pub const DEFAULT_DAYS_BACK: u32 = 7;
pub const MIN_DAYS_BACK: u32 = 1;
pub const MAX_DAYS_BACK: u32 = 30;

const LANGUAGE: &str = "en";
const SORT_BY: &str = "relevancy";

#[derive(Deserialize)]
struct EverythingResponse {
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<WireArticle>,
}

#[derive(Deserialize)]
struct WireArticle {
    #[serde(default)]
    source: WireSource,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Default)]
struct WireSource {
    name: Option<String>,
}

impl From<WireArticle> for Article {
    fn from(wire: WireArticle) -> Self {
        Article {
            title: wire.title.unwrap_or_default(),
            description: wire.description.filter(|d| !d.trim().is_empty()),
            source: wire.source.name.unwrap_or_else(|| "Unknown".to_string()),
            published_at: wire.published_at.unwrap_or_else(Utc::now),
            url: wire.url.unwrap_or_default(),
            image_url: wire.url_to_image,
        }
    }
}

/// NewsAPI `/v2/everything` client. Requests English results sorted by
/// relevance, restricted to the computed lookback floor.
pub struct NewsApiSource {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiSource {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: NEWSAPI_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl std::fmt::Debug for NewsApiSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiSource")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn search(&self, query: &str, days_back: u32) -> Result<Vec<Article>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::InvalidQuery("query must not be empty".to_string()));
        }
        if !(MIN_DAYS_BACK..=MAX_DAYS_BACK).contains(&days_back) {
            return Err(Error::InvalidQuery(format!(
                "lookback window must be between {MIN_DAYS_BACK} and {MAX_DAYS_BACK} days, got {days_back}"
            )));
        }

        let from = from_date(Utc::now(), days_back);
        tracing::debug!(query, days_back, from = %from, "searching articles");

        let response = self
            .client
            .get(format!("{}/everything", self.base_url))
            .query(&[
                ("q", query),
                ("language", LANGUAGE),
                ("sortBy", SORT_BY),
                ("from", from.as_str()),
            ])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Fetch(format!(
                "search service returned HTTP {status}: {body}"
            )));
        }

        let parsed = response.json::<EverythingResponse>().await?;
        into_articles(parsed)
    }
}

fn from_date(now: DateTime<Utc>, days_back: u32) -> String {
    (now - Duration::days(days_back as i64))
        .format("%Y-%m-%d")
        .to_string()
}

fn into_articles(response: EverythingResponse) -> Result<Vec<Article>> {
    if response.status != "ok" {
        let code = response.code.unwrap_or_else(|| "unknown".to_string());
        let message = response
            .message
            .unwrap_or_else(|| "no error detail".to_string());
        return Err(Error::Fetch(format!(
            "search service returned {code}: {message}"
        )));
    }
    Ok(response.articles.into_iter().map(Article::from).collect())
}
