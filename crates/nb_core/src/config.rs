use std::env;
use std::fmt;

use crate::error::{Error, Result};

pub const NEWSAPI_KEY_VAR: &str = "NEWSAPI_KEY";
pub const GROQ_KEY_VAR: &str = "GROQ_API_KEY";

/// The two secrets needed to talk to the external services. Read once at
/// startup and held in memory only.
#[derive(Clone)]
pub struct Credentials {
    pub newsapi_key: String,
    pub groq_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("newsapi_key", &"<redacted>")
            .field("groq_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Builds credentials from already-looked-up values. Empty or
    /// whitespace-only values count as absent; every missing key is named
    /// in the resulting error, not just the first one.
    pub fn resolve(newsapi_key: Option<String>, groq_key: Option<String>) -> Result<Self> {
        let newsapi_key = non_empty(newsapi_key);
        let groq_key = non_empty(groq_key);

        let mut missing = Vec::new();
        if newsapi_key.is_none() {
            missing.push(NEWSAPI_KEY_VAR.to_string());
        }
        if groq_key.is_none() {
            missing.push(GROQ_KEY_VAR.to_string());
        }
        if !missing.is_empty() {
            return Err(Error::MissingCredentials(missing));
        }

        Ok(Self {
            newsapi_key: newsapi_key.unwrap(),
            groq_key: groq_key.unwrap(),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::resolve(env::var(NEWSAPI_KEY_VAR).ok(), env::var(GROQ_KEY_VAR).ok())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
