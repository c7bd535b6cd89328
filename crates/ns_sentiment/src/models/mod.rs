use std::{fmt, str::FromStr, sync::Arc};
use serde::{Deserialize, Serialize};
use ns_core::{Error, Result, SentimentModel};

pub mod lexicon;
pub mod vader;

pub use lexicon::LexiconModel;
pub use vader::VaderModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    #[default]
    Lexicon,
    Vader,
}

impl ModelKind {
    pub fn threshold(&self) -> f64 {
        match self {
            ModelKind::Lexicon => LexiconModel::THRESHOLD,
            ModelKind::Vader => VaderModel::THRESHOLD,
        }
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lexicon" | "textblob" | "pattern" => Ok(ModelKind::Lexicon),
            "vader" => Ok(ModelKind::Vader),
            other => Err(Error::UnknownModel(other.to_string())),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Lexicon => f.write_str("lexicon"),
            ModelKind::Vader => f.write_str("vader"),
        }
    }
}

pub fn create_model(kind: ModelKind) -> Arc<dyn SentimentModel> {
    tracing::debug!("Creating {} sentiment model", kind);
    match kind {
        ModelKind::Lexicon => Arc::new(LexiconModel::new()),
        ModelKind::Vader => Arc::new(VaderModel::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_kind() {
        assert_eq!("Lexicon".parse::<ModelKind>().unwrap(), ModelKind::Lexicon);
        assert_eq!("TextBlob".parse::<ModelKind>().unwrap(), ModelKind::Lexicon);
        assert_eq!(" VADER ".parse::<ModelKind>().unwrap(), ModelKind::Vader);
        assert!(matches!("bert".parse::<ModelKind>(), Err(Error::UnknownModel(_))));
    }

    #[test]
    fn test_create_model_thresholds() {
        for kind in [ModelKind::Lexicon, ModelKind::Vader] {
            let model = create_model(kind);
            assert_eq!(model.threshold(), kind.threshold());
        }
        assert_eq!(create_model(ModelKind::Vader).name(), "VADER");
    }
}
