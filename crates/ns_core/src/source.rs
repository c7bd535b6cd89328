use async_trait::async_trait;
use crate::query::NewsQuery;
use crate::types::Article;
use crate::Result;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Name of the upstream service
    fn name(&self) -> &str;

    /// Fetch the articles matching a query. An empty list is not an error.
    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<Article>>;
}
