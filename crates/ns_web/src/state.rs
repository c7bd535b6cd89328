use std::sync::Arc;
use ns_core::{AppConfig, NewsSource};
use crate::cache::AnalysisCache;

pub struct AppState {
    /// `None` when no API key is configured; analyses then report the missing key.
    pub source: Option<Arc<dyn NewsSource>>,
    pub config: AppConfig,
    pub cache: AnalysisCache,
}

impl AppState {
    pub fn new(source: Option<Arc<dyn NewsSource>>, config: AppConfig) -> Self {
        Self {
            source,
            config,
            cache: AnalysisCache::default(),
        }
    }

    pub fn with_cache(mut self, cache: AnalysisCache) -> Self {
        self.cache = cache;
        self
    }
}
