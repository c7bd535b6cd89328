//! Word lists shared by the sentiment models.
//!
//! Polarity is in `[-1, 1]`, subjectivity in `[0, 1]`. Inflected forms are
//! listed explicitly; there is no stemming.

use std::{
    collections::{HashMap, HashSet},
    sync::OnceLock,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub polarity: f64,
    pub subjectivity: f64,
}

const WORDS: &[(&str, f64, f64)] = &[
    // positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("positive", 0.23, 0.55),
    ("success", 0.3, 0.4),
    ("successful", 0.75, 0.95),
    ("succeeds", 0.4, 0.5),
    ("win", 0.8, 0.4),
    ("wins", 0.8, 0.4),
    ("won", 0.6, 0.4),
    ("breakthrough", 0.6, 0.6),
    ("breakthroughs", 0.6, 0.6),
    ("innovative", 0.5, 0.75),
    ("innovation", 0.4, 0.5),
    ("revolutionize", 0.5, 0.6),
    ("revolutionizes", 0.5, 0.6),
    ("revolutionary", 0.6, 0.7),
    ("promise", 0.3, 0.5),
    ("promises", 0.4, 0.5),
    ("promising", 0.5, 0.6),
    ("boost", 0.4, 0.4),
    ("boosts", 0.4, 0.4),
    ("improve", 0.4, 0.4),
    ("improves", 0.4, 0.4),
    ("improved", 0.4, 0.4),
    ("improvement", 0.4, 0.4),
    ("advance", 0.3, 0.3),
    ("advances", 0.3, 0.3),
    ("advanced", 0.4, 0.6),
    ("growth", 0.3, 0.3),
    ("gain", 0.3, 0.3),
    ("gains", 0.3, 0.3),
    ("benefit", 0.4, 0.4),
    ("benefits", 0.4, 0.4),
    ("beneficial", 0.5, 0.5),
    ("opportunity", 0.3, 0.3),
    ("opportunities", 0.3, 0.3),
    ("powerful", 0.3, 1.0),
    ("impressive", 1.0, 1.0),
    ("exciting", 0.3, 0.8),
    ("excited", 0.4, 0.75),
    ("optimistic", 0.5, 0.8),
    ("hope", 0.3, 0.5),
    ("hopeful", 0.4, 0.6),
    ("happy", 0.8, 1.0),
    ("love", 0.5, 0.6),
    ("loves", 0.5, 0.6),
    ("helpful", 0.5, 0.5),
    ("safe", 0.5, 0.5),
    ("safer", 0.4, 0.5),
    ("secure", 0.4, 0.4),
    ("efficient", 0.4, 0.5),
    ("easy", 0.43, 0.83),
    ("smart", 0.21, 0.64),
    ("smarter", 0.3, 0.6),
    ("strong", 0.43, 0.73),
    ("stronger", 0.4, 0.7),
    ("record", 0.2, 0.3),
    ("leading", 0.3, 0.4),
    ("top", 0.5, 0.5),
    ("remarkable", 0.75, 0.75),
    ("incredible", 0.9, 0.9),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("brilliant", 0.9, 1.0),
    ("thrive", 0.5, 0.6),
    ("thrives", 0.5, 0.6),
    ("celebrate", 0.5, 0.5),
    ("celebrates", 0.5, 0.5),
    ("praise", 0.5, 0.5),
    ("praised", 0.5, 0.5),
    ("welcome", 0.8, 0.9),
    ("new", 0.14, 0.45),
    ("free", 0.4, 0.8),
    ("nice", 0.6, 1.0),
    ("useful", 0.3, 0.0),
    ("popular", 0.6, 0.8),
    ("surge", 0.3, 0.4),
    ("surges", 0.3, 0.4),
    ("soar", 0.4, 0.4),
    ("soars", 0.4, 0.4),
    ("rally", 0.3, 0.3),
    ("profit", 0.3, 0.3),
    ("profits", 0.3, 0.3),
    ("transformative", 0.5, 0.6),
    ("empower", 0.4, 0.5),
    ("empowers", 0.4, 0.5),
    ("cure", 0.4, 0.4),
    ("solve", 0.3, 0.3),
    ("solves", 0.3, 0.3),
    // neutral but opinionated
    ("mixed", 0.0, 0.1),
    ("uncertain", -0.1, 0.6),
    // negative
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("negative", -0.3, 0.4),
    ("fail", -0.5, 0.3),
    ("fails", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("failure", -0.5, 0.3),
    ("concern", -0.3, 0.4),
    ("concerns", -0.4, 0.4),
    ("concerned", -0.3, 0.5),
    ("worry", -0.4, 0.5),
    ("worries", -0.4, 0.5),
    ("worried", -0.4, 0.6),
    ("fear", -0.5, 0.5),
    ("fears", -0.5, 0.5),
    ("risk", -0.3, 0.3),
    ("risks", -0.3, 0.3),
    ("risky", -0.5, 0.6),
    ("danger", -0.5, 0.5),
    ("dangerous", -0.6, 0.9),
    ("threat", -0.5, 0.5),
    ("threats", -0.5, 0.5),
    ("threaten", -0.5, 0.5),
    ("threatens", -0.5, 0.5),
    ("displacement", -0.3, 0.3),
    ("layoffs", -0.5, 0.3),
    ("layoff", -0.5, 0.3),
    ("cut", -0.2, 0.2),
    ("cuts", -0.2, 0.2),
    ("loss", -0.4, 0.3),
    ("losses", -0.4, 0.3),
    ("lose", -0.4, 0.3),
    ("decline", -0.3, 0.3),
    ("declines", -0.3, 0.3),
    ("drop", -0.3, 0.3),
    ("drops", -0.3, 0.3),
    ("fall", -0.3, 0.3),
    ("falls", -0.3, 0.3),
    ("crash", -0.6, 0.4),
    ("crisis", -0.6, 0.5),
    ("scandal", -0.6, 0.6),
    ("lawsuit", -0.4, 0.3),
    ("lawsuits", -0.4, 0.3),
    ("sue", -0.4, 0.3),
    ("sues", -0.4, 0.3),
    ("sued", -0.4, 0.3),
    ("ban", -0.4, 0.3),
    ("bans", -0.4, 0.3),
    ("banned", -0.4, 0.3),
    ("fraud", -0.7, 0.6),
    ("scam", -0.7, 0.6),
    ("fake", -0.5, 1.0),
    ("misinformation", -0.5, 0.5),
    ("bias", -0.4, 0.5),
    ("biased", -0.5, 0.6),
    ("hack", -0.4, 0.3),
    ("hacked", -0.5, 0.3),
    ("breach", -0.5, 0.4),
    ("vulnerability", -0.4, 0.4),
    ("vulnerable", -0.4, 0.5),
    ("problem", -0.3, 0.3),
    ("problems", -0.3, 0.3),
    ("problematic", -0.4, 0.6),
    ("harm", -0.5, 0.5),
    ("harmful", -0.6, 0.6),
    ("controversial", -0.3, 0.7),
    ("controversy", -0.4, 0.6),
    ("warning", -0.3, 0.4),
    ("warns", -0.3, 0.4),
    ("slow", -0.3, 0.4),
    ("weak", -0.38, 0.63),
    ("wrong", -0.5, 0.9),
    ("angry", -0.5, 1.0),
    ("sad", -0.5, 1.0),
    ("panic", -0.6, 0.7),
    ("chaos", -0.6, 0.6),
    ("disaster", -0.7, 0.6),
    ("catastrophic", -0.8, 0.8),
    ("deadly", -0.7, 0.6),
    ("kill", -0.6, 0.4),
    ("kills", -0.6, 0.4),
    ("dead", -0.2, 0.4),
    ("unsafe", -0.5, 0.5),
    ("struggle", -0.4, 0.4),
    ("struggles", -0.4, 0.4),
    ("difficult", -0.5, 1.0),
    ("hard", -0.29, 0.54),
    ("expensive", -0.5, 0.7),
    ("criticism", -0.4, 0.5),
    ("criticized", -0.4, 0.5),
    ("backlash", -0.4, 0.5),
    ("misuse", -0.4, 0.4),
    ("abuse", -0.6, 0.5),
    ("doom", -0.6, 0.6),
    ("lies", -0.5, 0.6),
    ("hallucinations", -0.3, 0.4),
];

/// Words that scale the assessment that follows them.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("highly", 1.3),
    ("hugely", 1.4),
    ("super", 1.4),
    ("so", 1.2),
    ("most", 1.3),
    ("more", 1.2),
    ("deeply", 1.3),
    ("particularly", 1.2),
    ("absolutely", 1.5),
    ("completely", 1.4),
    ("totally", 1.4),
    ("quite", 1.1),
    ("slightly", 0.6),
    ("somewhat", 0.7),
    ("barely", 0.5),
    ("less", 0.7),
    ("little", 0.7),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere",
    "cannot", "without", "hardly", "dont", "doesnt", "didnt", "isnt", "arent",
    "wasnt", "werent", "wont", "cant", "couldnt", "shouldnt", "wouldnt",
];

fn words() -> &'static HashMap<&'static str, Entry> {
    static WORDS_MAP: OnceLock<HashMap<&'static str, Entry>> = OnceLock::new();
    WORDS_MAP.get_or_init(|| {
        WORDS
            .iter()
            .map(|&(word, polarity, subjectivity)| (word, Entry { polarity, subjectivity }))
            .collect()
    })
}

fn intensifiers() -> &'static HashMap<&'static str, f64> {
    static INTENSIFIERS_MAP: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();
    INTENSIFIERS_MAP.get_or_init(|| INTENSIFIERS.iter().copied().collect())
}

fn negations() -> &'static HashSet<&'static str> {
    static NEGATIONS_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NEGATIONS_SET.get_or_init(|| NEGATIONS.iter().copied().collect())
}

pub fn lookup(word: &str) -> Option<Entry> {
    words().get(word).copied()
}

/// Multiplier applied to the following assessment, if `word` is an intensifier.
pub fn intensity(word: &str) -> Option<f64> {
    intensifiers().get(word).copied()
}

pub fn is_negation(word: &str) -> bool {
    negations().contains(word) || word.ends_with("n't")
}

/// Lowercased word tokens. Apostrophes stay inside words so "isn't" survives as one token.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .map(|w| w.trim_matches(|c| c == '\'' || c == '’').replace('’', "'").to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
