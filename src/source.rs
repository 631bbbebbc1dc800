use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use reqwest::Url;

use crate::error::{Result, SourceError};
use crate::http::{HttpTransport, Request, Transport};
use crate::id;
use crate::model::{
    Chapter, ChapterDetails, ChapterListResponse, HomeSection, HomeSectionKind, Manga, PageCursor,
    ResultPage, SeriesListResponse,
};
use crate::parse;

pub const NAME: &str = "OmegaScans";
pub const BASE_URL: &str = "https://omegascans.org";
pub const API_URL: &str = "https://api.omegascans.org";

pub const FEATURED: &str = "featured";
pub const LATEST_RELEASES: &str = "latest_releases";
pub const DAILY: &str = "daily";
pub const MOST_VIEWED: &str = "most_viewed";

const CHAPTER_PAGE_SIZE: u32 = 30;
const LISTING_PAGE_SIZE: u32 = 10;

pub struct OmegaScans {
    transport: Box<dyn Transport + Send + Sync>,
}

impl Default for OmegaScans {
    fn default() -> Self {
        Self::new()
    }
}

impl OmegaScans {
    pub fn new() -> Self {
        Self::with_transport(Box::new(HttpTransport::default()))
    }

    pub fn with_transport(transport: Box<dyn Transport + Send + Sync>) -> Self {
        Self { transport }
    }

    /// Public link to a series page.
    pub fn share_url(&self, manga_id: &str) -> String {
        format!("{}/series/{}", BASE_URL, id::slug_part(manga_id))
    }

    pub async fn manga_details(&self, manga_id: &str) -> Result<Manga> {
        let url = self.site_url(&format!("/series/{}", id::slug_part(manga_id)))?;
        let html = self.fetch(url).await?;
        let doc = parse::document(&html)?;

        Ok(parse::details(&doc, manga_id))
    }

    /// Walks the chapter listing page by page and returns the full list in
    /// one go. Terminates on the page the API reports as its last.
    pub async fn chapters(&self, manga_id: &str) -> Result<Vec<Chapter>> {
        let series_id = id::series_part(manga_id);
        let mut chapters = vec![];
        let mut page: u32 = 1;

        loop {
            let url = self.api_url(
                "/chapter/query",
                &[
                    ("page", page.to_string()),
                    ("perPage", CHAPTER_PAGE_SIZE.to_string()),
                    ("series_id", series_id.to_owned()),
                ],
            )?;
            let body = self.fetch(url).await?;
            let data: ChapterListResponse = serde_json::from_str(&body)?;
            let (mut page_chapters, has_more) = parse::chapter_list(data, page);

            chapters.append(&mut page_chapters);

            if !has_more {
                return Ok(chapters);
            }
            page += 1;
        }
    }

    pub async fn chapter_details(&self, manga_id: &str, chapter_id: &str) -> Result<ChapterDetails> {
        let url = self.site_url(&format!(
            "/series/{}/{}",
            id::slug_part(manga_id),
            chapter_id
        ))?;
        let html = self.fetch(url).await?;
        let doc = parse::document(&html)?;

        Ok(parse::chapter_details(&doc, manga_id, chapter_id))
    }

    pub async fn carousel_titles(&self) -> Result<ResultPage> {
        let url = self.api_url("/series/banners", &[])?;
        let body = self.fetch(url).await?;
        let data = serde_json::from_str(&body)?;

        Ok(parse::carousel(data))
    }

    pub async fn search(&self, title: &str, cursor: Option<&PageCursor>) -> Result<ResultPage> {
        self.titles(&[("query_string", title.to_owned())], cursor).await
    }

    pub async fn latest_releases_titles(&self, cursor: Option<&PageCursor>) -> Result<ResultPage> {
        self.titles(&ordered_by("latest"), cursor).await
    }

    pub async fn daily_titles(&self, cursor: Option<&PageCursor>) -> Result<ResultPage> {
        self.titles(&ordered_by("day_views"), cursor).await
    }

    pub async fn most_viewed_titles(&self, cursor: Option<&PageCursor>) -> Result<ResultPage> {
        self.titles(&ordered_by("total_views"), cursor).await
    }

    /// Fetches every home section concurrently and hands each one to
    /// `callback` as its request completes, in no particular order. A failed
    /// section is logged and skipped without holding up its siblings, and
    /// the first failure is returned once all of them have settled.
    pub async fn home_page_sections<F>(&self, mut callback: F) -> Result<()>
    where
        F: FnMut(HomeSection),
    {
        let mut pending: FuturesUnordered<BoxFuture<'_, (HomeSection, Result<ResultPage>)>> =
            FuturesUnordered::new();

        pending.push(async { (featured_section(), self.carousel_titles().await) }.boxed());
        pending.push(
            async {
                (
                    listing_section(LATEST_RELEASES, "Our latest releases on comics"),
                    self.latest_releases_titles(None).await,
                )
            }
            .boxed(),
        );
        pending.push(
            async {
                (
                    listing_section(DAILY, "Daily trending"),
                    self.daily_titles(None).await,
                )
            }
            .boxed(),
        );
        pending.push(
            async {
                (
                    listing_section(MOST_VIEWED, "Most viewed all times"),
                    self.most_viewed_titles(None).await,
                )
            }
            .boxed(),
        );

        let mut failure = None;

        while let Some((mut section, result)) = pending.next().await {
            match result {
                Ok(page) => {
                    section.items = page.results;
                    callback(section);
                }
                Err(e) => {
                    error!("Home section '{}' failed: {}", section.id, e);
                    failure.get_or_insert(e);
                }
            }
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Continues one of the listing home sections. An id outside the known
    /// set is a contract violation and fails immediately.
    pub async fn view_more_items(
        &self,
        section_id: &str,
        cursor: Option<&PageCursor>,
    ) -> Result<ResultPage> {
        match section_id {
            LATEST_RELEASES => self.latest_releases_titles(cursor).await,
            DAILY => self.daily_titles(cursor).await,
            MOST_VIEWED => self.most_viewed_titles(cursor).await,
            _ => Err(SourceError::UnknownSection(section_id.to_owned())),
        }
    }

    /// Shared pagination step behind search and the fixed listings. An
    /// exhausted cursor resolves to an empty page without a network call.
    async fn titles(&self, query: &[(&str, String)], cursor: Option<&PageCursor>) -> Result<ResultPage> {
        if cursor.map_or(false, PageCursor::exhausted) {
            return Ok(ResultPage::default());
        }

        let page = cursor.map_or(0, |cursor| cursor.current_page) + 1;
        let per_page = cursor
            .and_then(|cursor| cursor.per_page)
            .unwrap_or(LISTING_PAGE_SIZE);

        let mut params = query.to_vec();
        params.push(("adult", "true".to_owned()));
        params.push(("page", page.to_string()));
        params.push(("per_page", per_page.to_string()));

        let url = self.api_url("/query", &params)?;
        let body = self.fetch(url).await?;
        let data: SeriesListResponse = serde_json::from_str(&body)?;

        Ok(parse::search_results(data))
    }

    async fn fetch(&self, url: Url) -> Result<String> {
        debug!("GET {}", url);

        self.transport
            .get(Request {
                url,
                headers: vec![
                    ("Referer", format!("{}/", BASE_URL)),
                    ("Origin", BASE_URL.to_owned()),
                ],
            })
            .await
    }

    fn site_url(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", BASE_URL, path);

        Url::parse(&raw).map_err(|_| SourceError::InvalidUrl(raw))
    }

    fn api_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let raw = format!("{}{}", API_URL, path);
        let mut url = Url::parse(&raw).map_err(|_| SourceError::InvalidUrl(raw))?;

        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }
}

fn ordered_by(key: &'static str) -> [(&'static str, String); 2] {
    [("order", "desc".to_owned()), ("orderBy", key.to_owned())]
}

fn featured_section() -> HomeSection {
    HomeSection {
        id: FEATURED,
        title: "Featured",
        kind: HomeSectionKind::Featured,
        contains_more_items: false,
        items: vec![],
    }
}

fn listing_section(id: &'static str, title: &'static str) -> HomeSection {
    HomeSection {
        id,
        title,
        kind: HomeSectionKind::SingleRowNormal,
        contains_more_items: true,
        items: vec![],
    }
}
