use async_trait::async_trait;

use crate::core::models::SearchResult;
use crate::core::search_error::SearchError;

#[async_trait]
pub trait SourceFinder: Send + Sync {
    async fn find_sources(&self, topic: &str) -> Result<SearchResult, SearchError>;
}
