use std::{fmt, time::Duration};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;
use ns_core::{Article, Error, NewsApiConfig, NewsQuery, NewsSource, Result};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("ns-news/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    status: String,
    #[serde(rename = "totalResults")]
    total_results: Option<u32>,
    #[serde(default)]
    articles: Vec<RawArticle>,
    code: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// An article as NewsAPI returns it; any field may be missing or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub source: RawSource,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

impl RawArticle {
    /// Records without a title or a parseable publication time are dropped.
    pub fn into_article(self) -> Option<Article> {
        let title = self.title.filter(|t| !t.trim().is_empty())?;
        let published_at = self
            .published_at
            .as_deref()
            .and_then(|p| DateTime::parse_from_rfc3339(p).ok())?
            .with_timezone(&Utc);

        Some(Article {
            source: self
                .source
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            title,
            description: self.description.filter(|d| !d.trim().is_empty()),
            author: self.author.filter(|a| !a.trim().is_empty()),
            published_at,
            url: self.url.unwrap_or_default(),
        })
    }
}

pub struct NewsApiClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl NewsApiClient {
    pub fn new(config: NewsApiConfig) -> Result<Self> {
        let api_key = config.api_key.ok_or(Error::MissingApiKey)?;
        let raw = format!("{}/everything", config.base_url.as_str().trim_end_matches('/'));
        let endpoint = Url::parse(&raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))?;
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, api_key, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// One request to `/everything`, returning the raw records untouched.
    pub async fn fetch_raw(&self, query: &NewsQuery) -> Result<Vec<RawArticle>> {
        query.validate()?;
        let (from, to) = query.date_range(Utc::now())?;
        let mut params: Vec<(&str, String)> = vec![
            ("q", query.query.clone()),
            ("from", from),
            ("to", to),
            ("language", query.language.clone()),
            ("sortBy", "publishedAt".to_string()),
            ("pageSize", query.page_size.to_string()),
        ];
        if let Some(sources) = &query.sources {
            params.push(("sources", sources.clone()));
        }
        debug!("GET {} with {:?}", self.endpoint, params);

        let response = self
            .client
            .get(self.endpoint.clone())
            .header("X-Api-Key", &self.api_key)
            .query(&params)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<NewsApiResponse>(&body) {
            Ok(parsed) if status.is_success() && parsed.status == "ok" => {
                debug!(
                    "NewsAPI reported {} total results, returned {}",
                    parsed.total_results.unwrap_or_default(),
                    parsed.articles.len()
                );
                Ok(parsed.articles)
            }
            Ok(parsed) => Err(Error::Api {
                code: parsed.code.unwrap_or_else(|| status.as_u16().to_string()),
                message: parsed.message.unwrap_or_else(|| "Unknown error".to_string()),
            }),
            Err(e) if status.is_success() => Err(Error::Api {
                code: "invalid_response".to_string(),
                message: format!("could not decode response: {}", e),
            }),
            Err(_) => Err(Error::Api {
                code: status.as_u16().to_string(),
                message: status.canonical_reason().unwrap_or("Unknown error").to_string(),
            }),
        }
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<Article>> {
        let raw = self.fetch_raw(query).await?;
        let received = raw.len();
        let articles: Vec<Article> = raw.into_iter().filter_map(RawArticle::into_article).collect();
        if articles.len() < received {
            warn!(
                "Skipped {} articles without a title or publication time",
                received - articles.len()
            );
        }
        Ok(articles)
    }
}
