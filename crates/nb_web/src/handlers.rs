use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use nb_core::Article;
use nb_inference::AnalysisOutcome;
use nb_news::{DEFAULT_DAYS_BACK, MAX_DAYS_BACK, MIN_DAYS_BACK};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub query: String,
    #[serde(default)]
    pub days_back: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
    pub no_articles: bool,
    pub articles: Vec<Article>,
    pub notices: Vec<String>,
}

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// One submission round trip: fetch, analyze, render. External-service
/// failures come back as notices in a 200 payload, never as a 5xx.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let query = request.query.trim().to_string();
    if query.is_empty() {
        return Json(AnalyzeResponse {
            analysis: String::new(),
            no_articles: false,
            articles: Vec::new(),
            notices: vec!["Query must not be empty.".to_string()],
        });
    }

    let days_back = clamp_days_back(request.days_back);
    tracing::info!(query = %query, days_back, "analyze request");

    let report = state.analyst.run(&query, days_back).await;
    Json(AnalyzeResponse {
        analysis: report.outcome.display_text().to_string(),
        no_articles: matches!(report.outcome, AnalysisOutcome::NoArticles),
        articles: report.articles,
        notices: report.notices,
    })
}

fn clamp_days_back(requested: Option<u32>) -> u32 {
    requested
        .unwrap_or(DEFAULT_DAYS_BACK)
        .clamp(MIN_DAYS_BACK, MAX_DAYS_BACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_app;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::Utc;
    use nb_core::{CompletionModel, Error, NewsSource, Result};
    use nb_inference::Analyst;
    use tower::util::ServiceExt;

    #[test]
    fn days_back_defaults_and_clamps() {
        assert_eq!(clamp_days_back(None), DEFAULT_DAYS_BACK);
        assert_eq!(clamp_days_back(Some(3)), 3);
        assert_eq!(clamp_days_back(Some(0)), MIN_DAYS_BACK);
        assert_eq!(clamp_days_back(Some(90)), MAX_DAYS_BACK);
    }

    struct StaticSource(Vec<Article>);

    #[async_trait]
    impl NewsSource for StaticSource {
        fn name(&self) -> &str {
            "static"
        }

        async fn search(&self, _query: &str, _days_back: u32) -> Result<Vec<Article>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl NewsSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn search(&self, _query: &str, _days_back: u32) -> Result<Vec<Article>> {
            Err(Error::Fetch("simulated outage".to_string()))
        }
    }

    struct EchoModel(&'static str);

    #[async_trait]
    impl CompletionModel for EchoModel {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn sample_article() -> Article {
        Article {
            title: "Inflation cools".to_string(),
            description: Some("Prices rose less than expected.".to_string()),
            source: "Reuters".to_string(),
            published_at: Utc::now(),
            url: "https://example.com/inflation".to_string(),
            image_url: None,
        }
    }

    async fn post_analyze(app: axum::Router, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn analyze_returns_analysis_and_articles() {
        let analyst = Analyst::new(
            Arc::new(StaticSource(vec![sample_article()])),
            Arc::new(EchoModel("Key Points: fixed analysis")),
        );
        let app = create_app(AppState { analyst }).await;

        let (status, body) =
            post_analyze(app, r#"{"query": "inflation", "days_back": 7}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"], "Key Points: fixed analysis");
        assert_eq!(body["no_articles"], false);
        assert_eq!(body["articles"].as_array().unwrap().len(), 1);
        assert_eq!(body["articles"][0]["title"], "Inflation cools");
        assert!(body["notices"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn analyze_surfaces_fetch_failures_as_notices() {
        let analyst = Analyst::new(Arc::new(FailingSource), Arc::new(EchoModel("unused")));
        let app = create_app(AppState { analyst }).await;

        let (status, body) = post_analyze(app, r#"{"query": "inflation"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["no_articles"], true);
        assert_eq!(body["analysis"], "No articles found for the given query.");
        let notices = body["notices"].as_array().unwrap();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].as_str().unwrap().contains("simulated outage"));
    }

    #[tokio::test]
    async fn analyze_rejects_blank_queries_inline() {
        let analyst = Analyst::new(
            Arc::new(StaticSource(vec![])),
            Arc::new(EchoModel("unused")),
        );
        let app = create_app(AppState { analyst }).await;

        let (status, body) = post_analyze(app, r#"{"query": "   "}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"], "");
        assert_eq!(
            body["notices"][0].as_str().unwrap(),
            "Query must not be empty."
        );
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let analyst = Analyst::new(
            Arc::new(StaticSource(vec![])),
            Arc::new(EchoModel("unused")),
        );
        let app = create_app(AppState { analyst }).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
