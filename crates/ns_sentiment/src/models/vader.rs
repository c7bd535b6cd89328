use std::fmt;
use ns_core::{PolarityScores, SentimentModel};
use crate::lexicon;

/// Lexicon polarity is scaled onto the `[-4, 4]` valence range.
const VALENCE_SCALE: f64 = 4.0;
const BOOSTER_INCREMENT: f64 = 0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Rule-based valence scorer in the style of VADER: sums word valences
/// adjusted for boosters, negation, contrast, capitals and exclamation
/// marks, then squashes the sum into a compound score in `[-1, 1]`.
pub struct VaderModel;

impl fmt::Debug for VaderModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaderModel").finish()
    }
}

impl VaderModel {
    pub const THRESHOLD: f64 = 0.05;

    pub fn new() -> Self {
        Self
    }
}

impl Default for VaderModel {
    fn default() -> Self {
        Self::new()
    }
}

struct Token {
    lower: String,
    shouting: bool,
}

fn tokens(text: &str) -> Vec<Token> {
    let words: Vec<&str> = text
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();

    // Capitals only count as emphasis when the rest of the text is not shouting too.
    let is_caps = |w: &str| w.chars().any(char::is_alphabetic) && w.chars().all(|c| !c.is_lowercase()) && w.len() > 1;
    let caps_words = words.iter().filter(|w| is_caps(w)).count();
    let mixed_case = caps_words > 0 && caps_words < words.len();

    words
        .iter()
        .map(|w| Token {
            lower: w.to_lowercase().replace('’', "'"),
            shouting: mixed_case && is_caps(w),
        })
        .collect()
}

fn booster(word: &str) -> Option<f64> {
    lexicon::intensity(word).map(|m| if m >= 1.0 { BOOSTER_INCREMENT } else { -BOOSTER_INCREMENT })
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

impl SentimentModel for VaderModel {
    fn name(&self) -> &str {
        "VADER"
    }

    fn threshold(&self) -> f64 {
        Self::THRESHOLD
    }

    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = tokens(text);
        let mut valences = vec![0.0; tokens.len()];

        for (i, token) in tokens.iter().enumerate() {
            let Some(entry) = lexicon::lookup(&token.lower) else {
                continue;
            };
            if entry.polarity == 0.0 {
                continue;
            }
            let mut valence = entry.polarity * VALENCE_SCALE;
            let sign = valence.signum();
            if token.shouting {
                valence += sign * CAPS_INCREMENT;
            }

            for distance in 1..=3 {
                if i < distance {
                    break;
                }
                let previous = &tokens[i - distance];
                if let Some(mut scalar) = booster(&previous.lower) {
                    if previous.shouting {
                        scalar += scalar.signum() * CAPS_INCREMENT;
                    }
                    let damping = match distance {
                        1 => 1.0,
                        2 => 0.95,
                        _ => 0.9,
                    };
                    valence += sign * scalar * damping;
                }
            }

            let negated = (1..=3)
                .filter(|&d| i >= d)
                .any(|d| lexicon::is_negation(&tokens[i - d].lower));
            if negated {
                valence *= NEGATION_SCALAR;
            }

            valences[i] = valence;
        }

        if let Some(pivot) = tokens.iter().position(|t| t.lower == "but") {
            for (i, valence) in valences.iter_mut().enumerate() {
                if i < pivot {
                    *valence *= 0.5;
                } else if i > pivot {
                    *valence *= 1.5;
                }
            }
        }

        let mut sum: f64 = valences.iter().sum();
        if sum != 0.0 {
            let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
            sum += sum.signum() * exclamations as f64 * EXCLAMATION_INCREMENT;
        }

        // Share of sentiment-bearing weight versus neutral words.
        let (mut positive, mut negative, mut neutral) = (0.0, 0.0, 0.0);
        for &valence in &valences {
            if valence > 0.0 {
                positive += valence + 1.0;
            } else if valence < 0.0 {
                negative += valence.abs() + 1.0;
            } else {
                neutral += 1.0;
            }
        }
        let total = positive + negative + neutral;
        let subjectivity = if total > 0.0 { (positive + negative) / total } else { 0.0 };

        PolarityScores {
            polarity: normalize(sum),
            subjectivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_core::SentimentLabel;

    #[test]
    fn test_headline_labels() {
        let model = VaderModel::new();
        assert_eq!(
            model.analyze("AI breakthrough promises to revolutionize healthcare").label,
            SentimentLabel::Positive
        );
        assert_eq!(
            model.analyze("Concerns grow over AI job displacement").label,
            SentimentLabel::Negative
        );
        assert_eq!(
            model.analyze("Regulators meet to discuss the proposal").label,
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn test_compound_normalization() {
        let model = VaderModel::new();
        // "good" scores 0.7 * 4 = 2.8
        let expected = 2.8 / (2.8f64 * 2.8 + 15.0).sqrt();
        assert!((model.polarity_scores("good").polarity - expected).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_favors_second_clause() {
        let model = VaderModel::new();
        let result = model.analyze("The launch was good but the results are terrible");
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_emphasis_increases_intensity() {
        let model = VaderModel::new();
        let plain = model.polarity_scores("good news").polarity;
        assert!(model.polarity_scores("GOOD news").polarity > plain);
        assert!(model.polarity_scores("good news!!!").polarity > plain);
        assert!(model.polarity_scores("very good news").polarity > plain);
        assert!(model.polarity_scores("not good news").polarity < 0.0);
    }

    #[test]
    fn test_all_caps_is_not_emphasis() {
        let model = VaderModel::new();
        let lower = model.polarity_scores("good news").polarity;
        let upper = model.polarity_scores("GOOD NEWS").polarity;
        assert!((lower - upper).abs() < 1e-9);
    }

    #[test]
    fn test_subjectivity() {
        let model = VaderModel::new();
        assert_eq!(model.polarity_scores("the cat sat").subjectivity, 0.0);
        let scores = model.polarity_scores("good cat");
        assert!(scores.subjectivity > 0.5 && scores.subjectivity < 1.0);
    }
}
