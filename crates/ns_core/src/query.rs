use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use crate::{Error, Result};

pub const DEFAULT_QUERY: &str = "artificial intelligence";
pub const DEFAULT_DAYS: u32 = 7;
pub const DEFAULT_LANGUAGE: &str = "en";
/// NewsAPI refuses page sizes above this.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewsQuery {
    pub query: String,
    pub days: u32,
    pub language: String,
    /// Comma separated NewsAPI source ids
    pub sources: Option<String>,
    pub page_size: u32,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            days: DEFAULT_DAYS,
            language: DEFAULT_LANGUAGE.to_string(),
            sources: None,
            page_size: MAX_PAGE_SIZE,
        }
    }
}

impl NewsQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Blank source lists are treated as "all sources".
    pub fn with_sources(mut self, sources: Option<String>) -> Self {
        self.sources = sources
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .filter(|s| !s.is_empty());
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.query.trim().is_empty() {
            return Err(Error::InvalidQuery("search query must not be empty".to_string()));
        }
        if self.days == 0 {
            return Err(Error::InvalidQuery("days must be at least 1".to_string()));
        }
        self.date_range(Utc::now())?;
        Ok(())
    }

    /// Lookback window as `(from, to)` calendar dates, `from` being `days` before `now`.
    pub fn date_range(&self, now: DateTime<Utc>) -> Result<(String, String)> {
        let from = now
            .checked_sub_signed(Duration::days(i64::from(self.days)))
            .ok_or_else(|| Error::InvalidQuery(format!("cannot look back {} days", self.days)))?;
        Ok((
            from.format("%Y-%m-%d").to_string(),
            now.format("%Y-%m-%d").to_string(),
        ))
    }
}
