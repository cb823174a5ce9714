pub mod newsapi;

pub use newsapi::{NewsApiSource, DEFAULT_DAYS_BACK, MAX_DAYS_BACK, MIN_DAYS_BACK};

pub mod prelude {
    pub use crate::newsapi::NewsApiSource;
    pub use nb_core::{Article, Error, NewsSource, Result};
}
