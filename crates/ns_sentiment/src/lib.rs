use ns_core::{Article, ScoredArticle, SentimentModel, SentimentResult};

pub mod lexicon;
pub mod models;

pub use models::{create_model, LexiconModel, ModelKind, VaderModel};

/// Headlines carry most of the signal; descriptions temper it.
pub const TITLE_WEIGHT: f64 = 0.7;
pub const DESCRIPTION_WEIGHT: f64 = 0.3;

/// Score title and description separately and blend them into the article's sentiment.
/// A missing description scores as neutral and still takes its share of the weight.
pub fn score_article(model: &dyn SentimentModel, article: Article) -> ScoredArticle {
    let title_sentiment = model.analyze(&article.title);
    let description_sentiment = model.analyze(article.description.as_deref().unwrap_or_default());

    let polarity = title_sentiment.polarity * TITLE_WEIGHT
        + description_sentiment.polarity * DESCRIPTION_WEIGHT;
    let subjectivity = title_sentiment.subjectivity * TITLE_WEIGHT
        + description_sentiment.subjectivity * DESCRIPTION_WEIGHT;

    ScoredArticle {
        article,
        sentiment: SentimentResult::new(polarity, subjectivity, model.threshold()),
        title_sentiment,
        description_sentiment,
    }
}

pub mod prelude {
    pub use super::models::{create_model, ModelKind};
    pub use super::score_article;
    pub use ns_core::{Article, Error, Result, ScoredArticle, SentimentModel};
}
