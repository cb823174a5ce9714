pub mod analyst;
pub mod digest;
pub mod models;

pub use analyst::{AnalysisOutcome, AnalysisReport, Analyst, FetchOutcome};
pub use digest::{compose_digest, DIGEST_ARTICLE_LIMIT, NO_DESCRIPTION_PLACEHOLDER};
pub use models::groq::GroqModel;

pub mod prelude {
    pub use crate::analyst::{AnalysisOutcome, AnalysisReport, Analyst};
    pub use crate::digest::compose_digest;
    pub use nb_core::{Article, CompletionModel, Error, NewsSource, Result};
}
