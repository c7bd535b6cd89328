use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ns_core::analysis::{self, HistogramBin, SourceBreakdown};
use ns_core::{NewsQuery, ScoredArticle, SentimentSummary};

pub const TOP_SOURCES: usize = 10;
pub const HISTOGRAM_BINS: usize = 30;
pub const NO_ARTICLES: &str = "No articles found. Try adjusting your search parameters.";

/// Everything the dashboard renders for one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub query: String,
    pub days: u32,
    pub category: String,
    pub sources: Option<String>,
    pub model: String,
    pub threshold: f64,
    pub generated_at: DateTime<Utc>,
    pub summary: SentimentSummary,
    pub source_breakdown: Vec<SourceBreakdown>,
    pub histogram: Vec<HistogramBin>,
    pub articles: Vec<ScoredArticle>,
    pub message: Option<String>,
}

impl AnalysisReport {
    pub fn build(
        query: &NewsQuery,
        model: &str,
        threshold: f64,
        category: &str,
        articles: Vec<ScoredArticle>,
    ) -> Self {
        Self {
            query: query.query.clone(),
            days: query.days,
            category: category.to_string(),
            sources: query.sources.clone(),
            model: model.to_string(),
            threshold,
            generated_at: Utc::now(),
            summary: SentimentSummary::from_articles(&articles),
            source_breakdown: analysis::source_breakdown(&articles, TOP_SOURCES),
            histogram: analysis::polarity_histogram(&articles, HISTOGRAM_BINS),
            message: articles.is_empty().then(|| NO_ARTICLES.to_string()),
            articles,
        }
    }
}
