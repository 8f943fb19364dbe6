use chrono::{DateTime, NaiveDateTime};
use hondana_lib::models::MangaInfo;

#[derive(Debug, Clone)]
pub struct Manga {
    pub id: i64,
    pub source_id: i64,
    pub title: String,
    pub author: Vec<String>,
    pub genre: Vec<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub path: String,
    pub cover_url: String,
    pub date_added: NaiveDateTime,
    pub last_uploaded_at: Option<NaiveDateTime>,
}

impl Default for Manga {
    fn default() -> Self {
        Self {
            id: 0,
            source_id: 0,
            title: "".to_string(),
            author: vec![],
            genre: vec![],
            status: None,
            description: None,
            path: "".to_string(),
            cover_url: "".to_string(),
            date_added: DateTime::UNIX_EPOCH.naive_utc(),
            last_uploaded_at: None,
        }
    }
}

impl From<MangaInfo> for Manga {
    fn from(m: MangaInfo) -> Self {
        Self {
            id: 0,
            source_id: m.source_id,
            title: m.title,
            author: m.author,
            genre: m.genre,
            status: m.status,
            description: m.description,
            path: m.path,
            cover_url: m.cover_url,
            date_added: DateTime::UNIX_EPOCH.naive_utc(),
            last_uploaded_at: None,
        }
    }
}

/// A bounded batch of resolved entries plus a flag indicating more data
/// is available from the source
#[derive(Debug, Clone)]
pub struct MangasPage {
    pub mangas: Vec<Manga>,
    pub has_next_page: bool,
}
