pub use crate::{
    models::{MangaInfo, MangaListPage, SourceInfo},
    source::CatalogSource,
};
