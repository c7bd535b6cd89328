use std::{collections::BTreeMap, fmt, path::Path};
use serde::{Deserialize, Serialize};
use url::Url;
use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
pub const API_KEY_VAR: &str = "NEWSAPI_KEY";
pub const BASE_URL_VAR: &str = "NEWSAPI_BASE_URL";
pub const ALL_SOURCES: &str = "All Sources";

#[derive(Clone)]
pub struct NewsApiConfig {
    pub api_key: Option<String>,
    pub base_url: Url,
}

impl fmt::Debug for NewsApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiConfig")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl NewsApiConfig {
    pub fn new(api_key: Option<String>, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(lookup(API_KEY_VAR), &base_url)
    }
}

/// Options offered by the dashboard, read from `config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub search_queries: Vec<String>,
    pub model_options: Vec<String>,
    pub source_categories: Vec<String>,
    /// Category key (e.g. `tech_media`) to comma separated NewsAPI source ids
    pub news_sources: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let news_sources = [
            ("tech_media", "techcrunch,the-verge,wired,ars-technica,engadget,hacker-news"),
            ("general_news", "bbc-news,reuters,associated-press,the-guardian-uk,al-jazeera-english"),
            ("us_news", "abc-news,cbs-news,nbc-news,cnn,usa-today,the-washington-post"),
            ("financial_news", "bloomberg,financial-post,the-wall-street-journal,business-insider,fortune"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            search_queries: [
                "artificial intelligence",
                "machine learning",
                "ChatGPT",
                "OpenAI",
                "generative AI",
                "AI regulation",
                "deep learning",
                "large language models",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            model_options: vec!["Lexicon".to_string(), "Vader".to_string()],
            source_categories: [ALL_SOURCES, "Tech Media", "General News", "US News", "Financial News"]
                .into_iter()
                .map(String::from)
                .collect(),
            news_sources,
        }
    }
}

impl AppConfig {
    /// Load the options file, falling back to the built-in defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("No config file at {}, using built-in defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Loaded dashboard options from {}", path.display());
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        if config.search_queries.is_empty() {
            return Err(Error::Config("search_queries must not be empty".to_string()));
        }
        if config.model_options.is_empty() {
            return Err(Error::Config("model_options must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Resolve a category display name ("Tech Media") to its source list.
    /// "All Sources", and listed categories without a source list, mean no filter.
    pub fn sources_for_category(&self, category: &str) -> Result<Option<String>> {
        if category == ALL_SOURCES {
            return Ok(None);
        }
        if !self.source_categories.iter().any(|c| c == category) {
            return Err(Error::Config(format!("Unknown source category: {}", category)));
        }
        Ok(self.news_sources.get(&category_key(category)).cloned())
    }
}

fn category_key(category: &str) -> String {
    category
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_api_config_from_lookup() {
        let vars: HashMap<&str, &str> = [(API_KEY_VAR, "secret")].into_iter().collect();
        let config = NewsApiConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.base_url.as_str(), "https://newsapi.org/v2");
        assert!(!format!("{:?}", config).contains("secret"));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let config = NewsApiConfig::new(Some("  ".to_string()), DEFAULT_BASE_URL).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_invalid_base_url() {
        let result = NewsApiConfig::new(None, "not a url");
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_sources_for_category() {
        let config = AppConfig::default();
        assert_eq!(config.sources_for_category(ALL_SOURCES).unwrap(), None);
        let tech = config.sources_for_category("Tech Media").unwrap().unwrap();
        assert!(tech.contains("techcrunch"));
        assert!(config.sources_for_category("Gossip").is_err());
    }

    #[test]
    fn test_from_json() {
        let raw = r#"{
            "search_queries": ["robotics"],
            "model_options": ["Vader"],
            "source_categories": ["All Sources", "Tech Media"],
            "news_sources": {"tech_media": "wired"}
        }"#;
        let config = AppConfig::from_json(raw).unwrap();
        assert_eq!(config.search_queries, vec!["robotics"]);
        assert_eq!(config.sources_for_category("Tech Media").unwrap().as_deref(), Some("wired"));

        let empty = r#"{"search_queries": [], "model_options": ["Vader"], "source_categories": [], "news_sources": {}}"#;
        assert!(matches!(AppConfig::from_json(empty), Err(Error::Config(_))));
        assert!(matches!(AppConfig::from_json("{"), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load("/definitely/not/here/config.json").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
