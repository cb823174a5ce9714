use nb_core::Article;

/// How many articles from the top of a result set feed the prompt.
pub const DIGEST_ARTICLE_LIMIT: usize = 5;

pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description available";

/// Reduces a fetch result to the textual digest fed into the analysis
/// prompt: one two-line block per article (title line, summary line),
/// blank-line separated, in the order the articles were given. An empty
/// input yields an empty string.
pub fn compose_digest(articles: &[Article]) -> String {
    articles
        .iter()
        .take(DIGEST_ARTICLE_LIMIT)
        .map(|article| {
            let summary = article
                .description
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(NO_DESCRIPTION_PLACEHOLDER);
            format!("Title: {}\nSummary: {}", article.title, summary)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
