use serde::Deserialize;

use super::pagination::PageCursor;

/// Body of `GET /chapter/query`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterListResponse {
    pub meta: PageCursor,
    #[serde(default)]
    pub data: Vec<ChapterRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChapterRecord {
    #[serde(default)]
    pub chapter_name: String,
    #[serde(default)]
    pub chapter_title: Option<String>,
    pub chapter_slug: String,
    #[serde(default)]
    pub created_at: String,
    /// Coins needed to unlock the chapter, 0 when free.
    #[serde(default)]
    pub price: i64,
}

/// Body of `GET /query`, shared by search and the fixed listings.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesListResponse {
    #[serde(default)]
    pub meta: Option<PageCursor>,
    #[serde(default)]
    pub data: Vec<SeriesRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeriesRecord {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    pub series_slug: String,
    #[serde(default)]
    pub thumbnail: String,
}

/// One entry of the `GET /series/banners` array.
#[derive(Debug, Clone, Deserialize)]
pub struct BannerRecord {
    #[serde(default)]
    pub banner: String,
    pub series: BannerSeries,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BannerSeries {
    pub id: i64,
    pub series_slug: String,
    #[serde(default)]
    pub title: String,
}
