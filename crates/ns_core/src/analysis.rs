//! Aggregation over scored articles: label counts, averages, per-source
//! breakdowns and the polarity histogram shown by the dashboard.

use std::{
    collections::{BTreeMap, HashSet},
    fmt,
};
use serde::{Deserialize, Serialize};
use crate::types::{ScoredArticle, SentimentLabel};

/// Average polarity beyond which the overall mood stops being neutral.
pub const MOOD_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl LabelCounts {
    pub fn from_articles(articles: &[ScoredArticle]) -> Self {
        let mut counts = Self::default();
        for article in articles {
            counts.add(article.label());
        }
        counts
    }

    fn add(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Share of `label` in percent; zero when there is nothing to count.
    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(label) as f64 / total as f64 * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelPercentages {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl From<&LabelCounts> for LabelPercentages {
    fn from(counts: &LabelCounts) -> Self {
        Self {
            positive: counts.percentage(SentimentLabel::Positive),
            neutral: counts.percentage(SentimentLabel::Neutral),
            negative: counts.percentage(SentimentLabel::Negative),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    GenerallyPositive,
    GenerallyNeutral,
    GenerallyNegative,
}

impl Mood {
    pub fn from_average(average_polarity: f64) -> Self {
        if average_polarity > MOOD_THRESHOLD {
            Mood::GenerallyPositive
        } else if average_polarity < -MOOD_THRESHOLD {
            Mood::GenerallyNegative
        } else {
            Mood::GenerallyNeutral
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mood::GenerallyPositive => f.write_str("📈 Generally Positive"),
            Mood::GenerallyNeutral => f.write_str("➡️ Generally Neutral"),
            Mood::GenerallyNegative => f.write_str("📉 Generally Negative"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub source: String,
    pub url: String,
    pub polarity: f64,
}

impl From<&ScoredArticle> for Highlight {
    fn from(scored: &ScoredArticle) -> Self {
        Self {
            title: scored.article.title.clone(),
            source: scored.article.source.clone(),
            url: scored.article.url.clone(),
            polarity: scored.polarity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub total: usize,
    pub counts: LabelCounts,
    pub percentages: LabelPercentages,
    pub average_polarity: f64,
    pub average_subjectivity: f64,
    pub mood: Mood,
    pub most_positive: Option<Highlight>,
    pub most_negative: Option<Highlight>,
    pub unique_sources: usize,
}

impl SentimentSummary {
    pub fn from_articles(articles: &[ScoredArticle]) -> Self {
        let counts = LabelCounts::from_articles(articles);
        let total = articles.len();
        let (average_polarity, average_subjectivity) = if total == 0 {
            (0.0, 0.0)
        } else {
            let n = total as f64;
            (
                articles.iter().map(|a| a.sentiment.polarity).sum::<f64>() / n,
                articles.iter().map(|a| a.sentiment.subjectivity).sum::<f64>() / n,
            )
        };

        let most_positive = (counts.positive > 0)
            .then(|| articles.iter().max_by(|a, b| a.polarity().total_cmp(&b.polarity())))
            .flatten()
            .map(Highlight::from);
        let most_negative = (counts.negative > 0)
            .then(|| articles.iter().min_by(|a, b| a.polarity().total_cmp(&b.polarity())))
            .flatten()
            .map(Highlight::from);

        let unique_sources = articles
            .iter()
            .map(|a| a.article.source.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            total,
            percentages: LabelPercentages::from(&counts),
            counts,
            average_polarity,
            average_subjectivity,
            mood: Mood::from_average(average_polarity),
            most_positive,
            most_negative,
            unique_sources,
        }
    }

    /// Labels with at least one article, most frequent first.
    pub fn distribution(&self) -> Vec<(SentimentLabel, usize, f64)> {
        let mut rows: Vec<_> = SentimentLabel::ALL
            .iter()
            .map(|&label| (label, self.counts.get(label), self.counts.percentage(label)))
            .filter(|(_, count, _)| *count > 0)
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCount {
    pub source: String,
    pub count: usize,
}

/// Articles per source, most prolific first, ties broken by name.
pub fn source_counts(articles: &[ScoredArticle], limit: usize) -> Vec<SourceCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for article in articles {
        *counts.entry(article.article.source.as_str()).or_insert(0) += 1;
    }
    let mut rows: Vec<_> = counts
        .into_iter()
        .map(|(source, count)| SourceCount { source: source.to_string(), count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.source.cmp(&b.source)));
    rows.truncate(limit);
    rows
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBreakdown {
    pub source: String,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SourceBreakdown {
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Label counts for the `limit` sources with the most articles.
pub fn source_breakdown(articles: &[ScoredArticle], limit: usize) -> Vec<SourceBreakdown> {
    let mut by_source: BTreeMap<&str, LabelCounts> = BTreeMap::new();
    for article in articles {
        by_source
            .entry(article.article.source.as_str())
            .or_default()
            .add(article.label());
    }
    let mut rows: Vec<_> = by_source
        .into_iter()
        .map(|(source, counts)| SourceBreakdown {
            source: source.to_string(),
            positive: counts.positive,
            neutral: counts.neutral,
            negative: counts.negative,
        })
        .collect();
    rows.sort_by(|a, b| b.total().cmp(&a.total()).then_with(|| a.source.cmp(&b.source)));
    rows.truncate(limit);
    rows
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Equal-width bins over `[-1, 1]`; a polarity of exactly 1.0 lands in the last bin.
pub fn polarity_histogram(articles: &[ScoredArticle], bins: usize) -> Vec<HistogramBin> {
    if bins == 0 {
        return Vec::new();
    }
    let width = 2.0 / bins as f64;
    let mut histogram: Vec<_> = (0..bins)
        .map(|i| HistogramBin {
            start: -1.0 + i as f64 * width,
            end: -1.0 + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();
    for article in articles {
        let polarity = article.polarity().clamp(-1.0, 1.0);
        let index = (((polarity + 1.0) / width).floor() as usize).min(bins - 1);
        histogram[index].count += 1;
    }
    histogram
}

/// Label filter applied by the presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentFilter {
    #[default]
    All,
    PositiveOnly,
    NegativeOnly,
}

impl SentimentFilter {
    /// Positive wins when both flags are set.
    pub fn from_flags(positive_only: bool, negative_only: bool) -> Self {
        if positive_only {
            SentimentFilter::PositiveOnly
        } else if negative_only {
            SentimentFilter::NegativeOnly
        } else {
            SentimentFilter::All
        }
    }

    pub fn matches(&self, article: &ScoredArticle) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::PositiveOnly => article.label() == SentimentLabel::Positive,
            SentimentFilter::NegativeOnly => article.label() == SentimentLabel::Negative,
        }
    }

    pub fn apply(&self, articles: Vec<ScoredArticle>) -> Vec<ScoredArticle> {
        articles.into_iter().filter(|a| self.matches(a)).collect()
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SentimentFilter::All => None,
            SentimentFilter::PositiveOnly => Some("🔽 Filtered to show only POSITIVE articles"),
            SentimentFilter::NegativeOnly => Some("🔽 Filtered to show only NEGATIVE articles"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelPartition {
    pub positive: Vec<ScoredArticle>,
    pub neutral: Vec<ScoredArticle>,
    pub negative: Vec<ScoredArticle>,
}

/// Split articles into disjoint per-label lists, keeping their order.
pub fn partition_by_label(articles: Vec<ScoredArticle>) -> LabelPartition {
    let mut partition = LabelPartition::default();
    for article in articles {
        match article.label() {
            SentimentLabel::Positive => partition.positive.push(article),
            SentimentLabel::Neutral => partition.neutral.push(article),
            SentimentLabel::Negative => partition.negative.push(article),
        }
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Article, SentimentResult};
    use chrono::{TimeZone, Utc};

    fn scored(title: &str, source: &str, polarity: f64) -> ScoredArticle {
        let sentiment = SentimentResult::new(polarity, 0.5, 0.1);
        ScoredArticle {
            article: Article {
                source: source.to_string(),
                title: title.to_string(),
                description: None,
                author: None,
                published_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
                url: format!("https://example.com/{}", title.replace(' ', "-")),
            },
            sentiment,
            title_sentiment: sentiment,
            description_sentiment: SentimentResult::neutral(),
        }
    }

    fn fixture() -> Vec<ScoredArticle> {
        vec![
            scored("good one", "Wired", 0.6),
            scored("fine one", "Wired", 0.3),
            scored("meh", "BBC", 0.0),
            scored("bad one", "Reuters", -0.4),
            scored("also meh", "BBC", 0.05),
            scored("worst", "Wired", -0.8),
            scored("best", "Reuters", 0.9),
            scored("flat", "CNN", -0.02),
        ]
    }

    #[test]
    fn test_summary_matches_manual_counts() {
        let summary = SentimentSummary::from_articles(&fixture());
        assert_eq!(summary.total, 8);
        assert_eq!(summary.counts, LabelCounts { positive: 3, neutral: 3, negative: 2 });
        assert!((summary.percentages.positive - 37.5).abs() < 1e-9);
        assert!((summary.percentages.neutral - 37.5).abs() < 1e-9);
        assert!((summary.percentages.negative - 25.0).abs() < 1e-9);

        let sum = summary.percentages.positive + summary.percentages.neutral + summary.percentages.negative;
        assert!((sum - 100.0).abs() < 1e-9);

        let expected_avg = (0.6 + 0.3 + 0.0 - 0.4 + 0.05 - 0.8 + 0.9 - 0.02) / 8.0;
        assert!((summary.average_polarity - expected_avg).abs() < 1e-9);
        assert!((summary.average_subjectivity - 0.5).abs() < 1e-9);
        assert_eq!(summary.mood, Mood::GenerallyNeutral);
        assert_eq!(summary.most_positive.as_ref().map(|h| h.title.as_str()), Some("best"));
        assert_eq!(summary.most_negative.as_ref().map(|h| h.title.as_str()), Some("worst"));
        assert_eq!(summary.unique_sources, 4);
    }

    #[test]
    fn test_percentages_sum_to_hundred_with_uneven_split() {
        let articles = vec![
            scored("a", "X", 0.5),
            scored("b", "X", 0.0),
            scored("c", "X", -0.5),
        ];
        let summary = SentimentSummary::from_articles(&articles);
        let sum = summary.percentages.positive + summary.percentages.neutral + summary.percentages.negative;
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((summary.percentages.positive - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary_reports_zero() {
        let summary = SentimentSummary::from_articles(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.counts, LabelCounts::default());
        assert_eq!(summary.percentages, LabelPercentages::default());
        assert_eq!(summary.average_polarity, 0.0);
        assert_eq!(summary.mood, Mood::GenerallyNeutral);
        assert!(summary.most_positive.is_none());
        assert!(summary.most_negative.is_none());
        assert_eq!(summary.unique_sources, 0);
        assert!(summary.distribution().is_empty());
    }

    #[test]
    fn test_highlights_need_matching_label() {
        let articles = vec![scored("calm", "X", 0.05), scored("calmer", "X", -0.05)];
        let summary = SentimentSummary::from_articles(&articles);
        assert!(summary.most_positive.is_none());
        assert!(summary.most_negative.is_none());
    }

    #[test]
    fn test_mood() {
        assert_eq!(Mood::from_average(0.2), Mood::GenerallyPositive);
        assert_eq!(Mood::from_average(-0.2), Mood::GenerallyNegative);
        assert_eq!(Mood::from_average(0.1), Mood::GenerallyNeutral);
    }

    #[test]
    fn test_distribution_orders_by_count() {
        let articles = vec![
            scored("a", "X", -0.5),
            scored("b", "X", -0.6),
            scored("c", "X", 0.5),
        ];
        let rows = SentimentSummary::from_articles(&articles).distribution();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, SentimentLabel::Negative);
        assert_eq!(rows[0].1, 2);
        assert_eq!(rows[1].0, SentimentLabel::Positive);
    }

    #[test]
    fn test_source_counts() {
        let rows = source_counts(&fixture(), 10);
        assert_eq!(
            rows,
            vec![
                SourceCount { source: "Wired".to_string(), count: 3 },
                SourceCount { source: "BBC".to_string(), count: 2 },
                SourceCount { source: "Reuters".to_string(), count: 2 },
                SourceCount { source: "CNN".to_string(), count: 1 },
            ]
        );
        assert_eq!(source_counts(&fixture(), 2).len(), 2);
    }

    #[test]
    fn test_source_breakdown() {
        let rows = source_breakdown(&fixture(), 10);
        let wired = rows.iter().find(|r| r.source == "Wired").unwrap();
        assert_eq!((wired.positive, wired.neutral, wired.negative), (2, 0, 1));
        assert_eq!(rows[0].source, "Wired");
        let total: usize = rows.iter().map(SourceBreakdown::total).sum();
        assert_eq!(total, 8);
    }

    #[test]
    fn test_histogram() {
        let articles = vec![
            scored("edge low", "X", -1.0),
            scored("edge high", "X", 1.0),
            scored("zero", "X", 0.0),
        ];
        let histogram = polarity_histogram(&articles, 4);
        assert_eq!(histogram.len(), 4);
        assert_eq!(histogram.iter().map(|b| b.count).collect::<Vec<_>>(), vec![1, 0, 1, 1]);
        assert!((histogram[0].start + 1.0).abs() < 1e-9);
        assert!((histogram[3].end - 1.0).abs() < 1e-9);
        assert!(polarity_histogram(&articles, 0).is_empty());
    }

    #[test]
    fn test_filters_partition_disjointly() {
        let articles = fixture();
        let positive = SentimentFilter::PositiveOnly.apply(articles.clone());
        let negative = SentimentFilter::NegativeOnly.apply(articles.clone());
        assert!(positive.iter().all(|a| !negative.contains(a)));
        assert!(positive.iter().all(|a| a.label() == SentimentLabel::Positive));
        assert!(negative.iter().all(|a| a.label() == SentimentLabel::Negative));
        assert_eq!(SentimentFilter::All.apply(articles.clone()).len(), articles.len());

        let partition = partition_by_label(articles.clone());
        assert_eq!(partition.positive, positive);
        assert_eq!(partition.negative, negative);
        assert_eq!(
            partition.positive.len() + partition.neutral.len() + partition.negative.len(),
            articles.len()
        );
        assert!(partition.neutral.iter().all(|a| !positive.contains(a) && !negative.contains(a)));
    }

    #[test]
    fn test_filter_flags() {
        assert_eq!(SentimentFilter::from_flags(false, false), SentimentFilter::All);
        assert_eq!(SentimentFilter::from_flags(true, false), SentimentFilter::PositiveOnly);
        assert_eq!(SentimentFilter::from_flags(false, true), SentimentFilter::NegativeOnly);
        assert_eq!(SentimentFilter::from_flags(true, true), SentimentFilter::PositiveOnly);
        assert!(SentimentFilter::All.notice().is_none());
    }

    #[test]
    fn test_filter_on_empty_list() {
        assert!(SentimentFilter::PositiveOnly.apply(Vec::new()).is_empty());
        assert_eq!(partition_by_label(Vec::new()), LabelPartition::default());
    }
}
