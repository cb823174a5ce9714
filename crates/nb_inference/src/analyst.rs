use std::sync::Arc;

use nb_core::{Article, CompletionModel, NewsSource};

use crate::digest::compose_digest;

pub const NO_ARTICLES_MESSAGE: &str = "No articles found for the given query.";

pub const ANALYSIS_FALLBACK_MESSAGE: &str = "Error generating analysis. Please try again.";

pub const ANALYSIS_PROMPT_TEMPLATE: &str = "\
You are an AI assistant helping an equity research analyst. Given the query \
and the news article summaries below, provide an analysis with four labeled \
sections: Key Points, Trends, Implications, Recommendations.

Query: {query}

Summaries:
{digest}
";

/// Result of one fetch step. A failed fetch degrades to an empty article
/// list plus a user-visible notice; it never propagates.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub articles: Vec<Article>,
    pub notice: Option<String>,
}

/// What the analysis step produced. `Failed` keeps the underlying reason
/// for logging and notices; user-facing text comes from `display_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Generated(String),
    NoArticles,
    Failed(String),
}

impl AnalysisOutcome {
    pub fn display_text(&self) -> &str {
        match self {
            AnalysisOutcome::Generated(text) => text,
            AnalysisOutcome::NoArticles => NO_ARTICLES_MESSAGE,
            AnalysisOutcome::Failed(_) => ANALYSIS_FALLBACK_MESSAGE,
        }
    }
}

/// Everything the presentation layer needs to render one submission.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub articles: Vec<Article>,
    pub outcome: AnalysisOutcome,
    pub notices: Vec<String>,
}

/// Runs the fetch → digest → complete pipeline for one submission. Holds
/// the injected service clients; stateless across submissions.
#[derive(Clone)]
pub struct Analyst {
    source: Arc<dyn NewsSource>,
    model: Arc<dyn CompletionModel>,
}

impl Analyst {
    pub fn new(source: Arc<dyn NewsSource>, model: Arc<dyn CompletionModel>) -> Self {
        Self { source, model }
    }

    pub fn render_prompt(query: &str, digest: &str) -> String {
        ANALYSIS_PROMPT_TEMPLATE
            .replace("{query}", query)
            .replace("{digest}", digest)
    }

    /// Fetches articles for the query. Any provider failure is caught and
    /// converted to an empty list plus a notice; no retry.
    pub async fn fetch_articles(&self, query: &str, days_back: u32) -> FetchOutcome {
        match self.source.search(query, days_back).await {
            Ok(articles) => {
                tracing::info!(count = articles.len(), "📰 fetched articles");
                FetchOutcome {
                    articles,
                    notice: None,
                }
            }
            Err(err) => {
                tracing::warn!("fetch from {} failed: {err}", self.source.name());
                FetchOutcome {
                    articles: Vec::new(),
                    notice: Some(format!("Could not fetch articles: {err}")),
                }
            }
        }
    }

    /// Generates the analysis text for an already-fetched article set. An
    /// empty set short-circuits without touching the completion service;
    /// a completion failure degrades to the fixed fallback message.
    pub async fn generate_analysis(&self, query: &str, articles: &[Article]) -> AnalysisOutcome {
        if articles.is_empty() {
            return AnalysisOutcome::NoArticles;
        }

        let digest = compose_digest(articles);
        let prompt = Self::render_prompt(query, &digest);
        match self.model.complete(&prompt).await {
            Ok(text) => {
                tracing::info!("🧠 analysis generated by {}", self.model.name());
                AnalysisOutcome::Generated(text)
            }
            Err(err) => {
                tracing::warn!("completion via {} failed: {err}", self.model.name());
                AnalysisOutcome::Failed(err.to_string())
            }
        }
    }

    /// The full pipeline for one user submission.
    pub async fn run(&self, query: &str, days_back: u32) -> AnalysisReport {
        let fetch = self.fetch_articles(query, days_back).await;
        let mut notices = Vec::new();
        if let Some(notice) = fetch.notice {
            notices.push(notice);
        }

        let outcome = self.generate_analysis(query, &fetch.articles).await;
        if let AnalysisOutcome::Failed(reason) = &outcome {
            notices.push(format!("Analysis failed: {reason}"));
        }

        AnalysisReport {
            articles: fetch.articles,
            outcome,
            notices,
        }
    }
}
