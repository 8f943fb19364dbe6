use hondana_lib::prelude::{CatalogSource, MangaInfo};
use thiserror::Error;

use crate::domain::{
    entities::manga::{Manga, MangasPage},
    repositories::manga::{MangaRepository, MangaRepositoryError},
};

#[derive(Debug, Error)]
pub enum MangaError {
    #[error("repository return error: {0}")]
    RepositoryError(#[from] MangaRepositoryError),
    #[error("other error: {0}")]
    Other(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct MangaService<R>
where
    R: MangaRepository,
{
    repo: R,
}

impl<R> MangaService<R>
where
    R: MangaRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fetch one page of a source listing and resolve every raw item into a
    /// persisted entry, keeping the listing order. Items are resolved one at
    /// a time so a single page fetch never issues overlapping writes. Any
    /// failure, from the source or from a single item, fails the whole call.
    pub async fn get_manga_page(
        &self,
        source: &dyn CatalogSource,
        page: i64,
    ) -> Result<MangasPage, MangaError> {
        let source_id = source.get_source_info().id;
        let source_page = source.fetch_manga_list(page).await?;

        debug!(
            "fetched {} manga from source {source_id} page {page}",
            source_page.mangas.len()
        );

        let mut mangas = Vec::with_capacity(source_page.mangas.len());
        for info in source_page.mangas {
            mangas.push(self.get_or_add_manga_from_source(info, source_id).await?);
        }

        Ok(MangasPage {
            mangas,
            has_next_page: source_page.has_next_page,
        })
    }

    /// Look up the persisted entry matching a raw source item, creating it
    /// if absent. The repository assigns the identity on insert.
    pub async fn get_or_add_manga_from_source(
        &self,
        info: MangaInfo,
        source_id: i64,
    ) -> Result<Manga, MangaError> {
        let manga = if let Ok(manga) = self
            .repo
            .get_manga_by_source_path(source_id, &info.path)
            .await
        {
            manga
        } else {
            let mut manga = Manga::from(info);
            manga.source_id = source_id;

            self.repo.insert_manga(&mut manga).await?;

            manga
        };

        Ok(manga)
    }
}
