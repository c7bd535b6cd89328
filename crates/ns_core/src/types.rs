use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub source: String,
    pub title: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub published_at: DateTime<Utc>,
    pub url: String,
}

/// Categorical bucket derived by thresholding a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// `polarity > threshold` is positive, `polarity < -threshold` negative, anything in between neutral.
    pub fn from_polarity(polarity: f64, threshold: f64) -> Self {
        if polarity > threshold {
            SentimentLabel::Positive
        } else if polarity < -threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "😊",
            SentimentLabel::Neutral => "😐",
            SentimentLabel::Negative => "😞",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub polarity: f64,
    pub subjectivity: f64,
    pub label: SentimentLabel,
    /// Distance from neutral, `|polarity|`.
    pub confidence: f64,
}

impl SentimentResult {
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
            label: SentimentLabel::Neutral,
            confidence: 0.0,
        }
    }

    pub fn new(polarity: f64, subjectivity: f64, threshold: f64) -> Self {
        let polarity = polarity.clamp(-1.0, 1.0);
        Self {
            polarity,
            subjectivity: subjectivity.clamp(0.0, 1.0),
            label: SentimentLabel::from_polarity(polarity, threshold),
            confidence: polarity.abs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredArticle {
    pub article: Article,
    pub sentiment: SentimentResult,
    pub title_sentiment: SentimentResult,
    pub description_sentiment: SentimentResult,
}

impl ScoredArticle {
    pub fn label(&self) -> SentimentLabel {
        self.sentiment.label
    }

    pub fn polarity(&self) -> f64 {
        self.sentiment.polarity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_thresholds() {
        assert_eq!(SentimentLabel::from_polarity(0.11, 0.1), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(0.1, 0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.1, 0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.11, 0.1), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(0.06, 0.05), SentimentLabel::Positive);
    }

    #[test]
    fn test_result_clamps_and_sets_confidence() {
        let result = SentimentResult::new(-1.4, 1.2, 0.1);
        assert_eq!(result.polarity, -1.0);
        assert_eq!(result.subjectivity, 1.0);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
    }
}
