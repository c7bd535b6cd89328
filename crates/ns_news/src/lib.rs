pub mod analyzer;
pub mod client;
pub mod logging;

pub use analyzer::NewsAnalyzer;
pub use client::{NewsApiClient, RawArticle};
pub use logging::init_logging;

pub mod prelude {
    pub use super::analyzer::NewsAnalyzer;
    pub use super::client::NewsApiClient;
    pub use ns_core::{Article, Error, NewsQuery, NewsSource, Result, ScoredArticle};
}
