use async_trait::async_trait;

use crate::error::Result;
use crate::types::Article;

/// A searchable news provider. Implementations return articles in the
/// provider's own relevance order.
#[async_trait]
pub trait NewsSource: Send + Sync {
    fn name(&self) -> &str;

    async fn search(&self, query: &str, days_back: u32) -> Result<Vec<Article>>;
}

/// A text-completion backend. `complete` issues a single synchronous
/// request and returns the generated text verbatim.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String>;
}
