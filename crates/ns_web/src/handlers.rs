use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;
use serde::Deserialize;
use tracing::info;
use ns_core::{config::ALL_SOURCES, query::DEFAULT_DAYS, Error, NewsQuery};
use ns_news::NewsAnalyzer;
use ns_sentiment::{create_model, ModelKind};
use crate::{cache::CacheKey, error::ApiError, report::AnalysisReport, AppState};

pub const MAX_DAYS: u32 = 30;

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Debug, Default, Deserialize)]
pub struct AnalysisParams {
    pub query: Option<String>,
    pub days: Option<u32>,
    pub model: Option<String>,
    pub category: Option<String>,
}

pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.config.clone())
}

pub async fn get_analysis(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalysisParams>,
) -> Result<Json<Arc<AnalysisReport>>, ApiError> {
    let config = &state.config;

    let query_text = params
        .query
        .filter(|q| !q.trim().is_empty())
        .or_else(|| config.search_queries.first().cloned())
        .ok_or_else(|| Error::InvalidQuery("no search query given".to_string()))?;

    let days = params.days.unwrap_or(DEFAULT_DAYS);
    if !(1..=MAX_DAYS).contains(&days) {
        return Err(Error::InvalidQuery(format!("days must be between 1 and {}", MAX_DAYS)).into());
    }

    let model_kind: ModelKind = match params.model.as_deref().or(config.model_options.first().map(String::as_str)) {
        Some(name) => name.parse()?,
        None => ModelKind::default(),
    };

    let category = params.category.unwrap_or_else(|| ALL_SOURCES.to_string());
    let sources = config.sources_for_category(&category)?;

    let query = NewsQuery::new(query_text.trim())
        .with_days(days)
        .with_sources(sources);
    query.validate()?;

    let key = CacheKey {
        query: query.clone(),
        model: model_kind,
    };
    if let Some(report) = state.cache.get(&key).await {
        info!("♻️ Serving cached analysis for \"{}\"", query.query);
        return Ok(Json(report));
    }

    let source = state.source.clone().ok_or(Error::MissingApiKey)?;
    let model = create_model(model_kind);
    let analyzer = NewsAnalyzer::new(source, model.clone());
    let articles = analyzer.analyze(&query).await?;

    let report = Arc::new(AnalysisReport::build(
        &query,
        model.name(),
        model.threshold(),
        &category,
        articles,
    ));
    state.cache.insert(key, report.clone()).await;
    Ok(Json(report))
}
