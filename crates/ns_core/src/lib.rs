pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod source;
pub mod types;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use analysis::{SentimentFilter, SentimentSummary};
pub use config::{AppConfig, NewsApiConfig};
pub use models::{PolarityScores, SentimentModel};
pub use query::NewsQuery;
pub use source::NewsSource;
pub use types::{Article, ScoredArticle, SentimentLabel, SentimentResult};

pub mod prelude {
    pub use super::{Article, Error, NewsQuery, Result, ScoredArticle, SentimentLabel, SentimentResult};
}
