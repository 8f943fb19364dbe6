use async_trait::async_trait;

use crate::models::{MangaListPage, SourceInfo};
use anyhow::Result;

/// A pluggable provider of remote listing data, queried by page
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn get_source_info(&self) -> SourceInfo;

    async fn fetch_manga_list(&self, page: i64) -> Result<MangaListPage>;
}
