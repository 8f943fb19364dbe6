use crate::domain::entities::manga::Manga;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MangaRepositoryError {
    #[error("manga not found")]
    NotFound,
    #[error("database return error: {0}")]
    DbError(#[from] anyhow::Error),
}

#[async_trait]
pub trait MangaRepository: Send + Sync {
    async fn get_manga_by_source_path(
        &self,
        source_id: i64,
        path: &str,
    ) -> Result<Manga, MangaRepositoryError>;
    async fn insert_manga(&self, manga: &mut Manga) -> Result<(), MangaRepositoryError>;
}
