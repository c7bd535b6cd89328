use std::sync::Arc;
use tracing::info;
use ns_core::{NewsQuery, NewsSource, Result, ScoredArticle, SentimentModel};
use ns_sentiment::score_article;

/// Fetches articles from a news source and scores each one.
pub struct NewsAnalyzer {
    source: Arc<dyn NewsSource>,
    model: Arc<dyn SentimentModel>,
}

impl NewsAnalyzer {
    pub fn new(source: Arc<dyn NewsSource>, model: Arc<dyn SentimentModel>) -> Self {
        Self { source, model }
    }

    /// Scored articles, newest first. Finding nothing yields an empty list, not an error.
    pub async fn analyze(&self, query: &NewsQuery) -> Result<Vec<ScoredArticle>> {
        query.validate()?;
        info!(
            "📡 Fetching \"{}\" news from the last {} days via {}...",
            query.query,
            query.days,
            self.source.name()
        );
        let articles = self.source.fetch_articles(query).await?;

        if articles.is_empty() {
            info!("No articles found.");
            return Ok(Vec::new());
        }

        info!(
            "Found {} articles. Analyzing sentiment with {}...",
            articles.len(),
            self.model.name()
        );
        let mut scored: Vec<ScoredArticle> = articles
            .into_iter()
            .map(|article| score_article(self.model.as_ref(), article))
            .collect();
        scored.sort_by(|a, b| b.article.published_at.cmp(&a.article.published_at));

        info!("Processed {} articles with sentiment analysis.", scored.len());
        Ok(scored)
    }
}
