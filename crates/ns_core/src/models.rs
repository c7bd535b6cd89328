use std::fmt;
use serde::{Deserialize, Serialize};
use crate::types::SentimentResult;

/// Raw scores produced by a model before labelling.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    pub polarity: f64,
    pub subjectivity: f64,
}

pub trait SentimentModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Polarity magnitude a text must exceed to leave the neutral bucket.
    fn threshold(&self) -> f64;

    /// Score a non-empty piece of text.
    fn polarity_scores(&self, text: &str) -> PolarityScores;

    /// Score and label a piece of text. Empty text is neutral with zero confidence.
    fn analyze(&self, text: &str) -> SentimentResult {
        if text.trim().is_empty() {
            return SentimentResult::neutral();
        }
        let scores = self.polarity_scores(text);
        SentimentResult::new(scores.polarity, scores.subjectivity, self.threshold())
    }
}
