use std::fmt;
use ns_core::{PolarityScores, SentimentModel};
use crate::lexicon;

/// Negated assessments flip and lose half their strength.
const NEGATION_FACTOR: f64 = -0.5;

/// Averages the polarity and subjectivity of every lexicon word in the text,
/// adjusted by a directly preceding intensifier or negation.
pub struct LexiconModel;

impl fmt::Debug for LexiconModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconModel").finish()
    }
}

impl LexiconModel {
    pub const THRESHOLD: f64 = 0.1;

    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for LexiconModel {
    fn name(&self) -> &str {
        "Lexicon"
    }

    fn threshold(&self) -> f64 {
        Self::THRESHOLD
    }

    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = lexicon::tokenize(text);
        let mut assessments: Vec<(f64, f64)> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(entry) = lexicon::lookup(token) else {
                continue;
            };
            let mut polarity = entry.polarity;
            let mut subjectivity = entry.subjectivity;

            // "not very good": the intensifier sits between the negation and the word
            let mut back = i;
            if back > 0 {
                if let Some(multiplier) = lexicon::intensity(&tokens[back - 1]) {
                    polarity *= multiplier;
                    subjectivity *= multiplier;
                    back -= 1;
                }
            }
            if back > 0 && lexicon::is_negation(&tokens[back - 1]) {
                polarity *= NEGATION_FACTOR;
            }

            assessments.push((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)));
        }

        if assessments.is_empty() {
            return PolarityScores::default();
        }
        let n = assessments.len() as f64;
        PolarityScores {
            polarity: assessments.iter().map(|(p, _)| p).sum::<f64>() / n,
            subjectivity: assessments.iter().map(|(_, s)| s).sum::<f64>() / n,
        }
    }
}
