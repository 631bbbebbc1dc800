use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use crabquery::{Document, Element};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SourceError};
use crate::id;
use crate::model::{
    BannerRecord, Chapter, ChapterDetails, ChapterListResponse, ChapterRecord, Manga, ResultPage,
    SearchManga, SeriesListResponse, Tag,
};

// "Written by (Someone)" -> "Someone"
static AUTHOR_BYLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((.*)\)").unwrap());
// Covers go through the Next.js image proxy, the real url sits url-encoded
// in its `url` query parameter.
static PROXIED_IMAGE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"url=([^&]*)").unwrap());

const DATE_FORMATS: [&str; 2] = [
    // 2023-05-01T10:00:00.000000
    "%Y-%m-%dT%H:%M:%S%.f",
    // 2023-05-01 10:00:00
    "%Y-%m-%d %H:%M:%S",
];

/// crabquery panics instead of erroring on some malformed input, so the
/// parse is fenced off.
pub fn document(html: &str) -> Result<Document> {
    std::panic::catch_unwind(|| Document::from(html)).map_err(|_e| SourceError::BadHTML)
}

pub fn details(doc: &Document, manga_id: &str) -> Manga {
    let badges = doc.select("#content div.flex.flex-row > span");
    let (status, genres) = match badges.split_first() {
        Some((status, genres)) => (
            status.text().unwrap_or_default(),
            genres
                .iter()
                .filter_map(|genre| genre.text())
                .map(Tag::new)
                .collect(),
        ),
        None => (String::new(), vec![]),
    };

    Manga {
        id: manga_id.to_owned(),
        title: first_text(doc, "#content h1"),
        cover: details_thumbnail(doc),
        author: byline_author(&first_text(doc, "#content span.text-base")),
        artist: String::new(),
        description: first_text(doc, "#content p").trim().to_owned(),
        status,
        genres,
    }
}

/// Decoded cover url from the series page, or an empty string when there is
/// no recognizable cover.
pub fn details_thumbnail(doc: &Document) -> String {
    select_first(doc, "#content img")
        .and_then(|img| img.attr("src"))
        .and_then(|src| {
            PROXIED_IMAGE_URL
                .captures(&src)
                .and_then(|captures| captures.get(1))
                .map(|url| url.as_str().to_owned())
        })
        .map(|url| {
            urlencoding::decode(&url)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_default()
        })
        .unwrap_or_default()
}

/// Splits one `/chapter/query` page into its free chapters and whether more
/// pages follow. Paid chapters are dropped here.
pub fn chapter_list(data: ChapterListResponse, page: u32) -> (Vec<Chapter>, bool) {
    let has_more = data.meta.last_page != Some(page);
    let chapters = data
        .data
        .into_iter()
        .filter(|chapter| chapter.price == 0)
        .map(chapter)
        .collect();

    (chapters, has_more)
}

pub fn chapter(chapter: ChapterRecord) -> Chapter {
    let number = chapter_number(&chapter.chapter_name);
    let posted = posted_date(&chapter.created_at);

    Chapter {
        id: chapter.chapter_slug,
        title: chapter.chapter_title.unwrap_or_default(),
        number,
        posted,
    }
}

/// Chapter names read "Chapter 87", the number is the second word. Anything
/// without one parses to NaN so it cannot be mistaken for a real chapter 0.
pub fn chapter_number(chapter_name: &str) -> f32 {
    chapter_name
        .split_whitespace()
        .nth(1)
        .and_then(|number| number.parse().ok())
        .unwrap_or(f32::NAN)
}

pub fn posted_date(created_at: &str) -> Option<DateTime<Utc>> {
    if created_at.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(created_at) {
        return Some(date.with_timezone(&Utc));
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(created_at, format) {
            return Some(Utc.from_utc_datetime(&date));
        }
    }

    None
}

pub fn chapter_details(doc: &Document, manga_id: &str, chapter_id: &str) -> ChapterDetails {
    let pages = doc
        .select("#content div.container > div > img")
        .iter()
        .map(page_url)
        .collect();

    ChapterDetails {
        id: chapter_id.to_owned(),
        manga_id: manga_id.to_owned(),
        pages,
    }
}

pub fn carousel(data: Vec<BannerRecord>) -> ResultPage {
    let results = data
        .into_iter()
        .map(|banner| SearchManga {
            id: id::compose(banner.series.id, &banner.series.series_slug),
            title: banner.series.title,
            cover: banner.banner,
        })
        .collect();

    ResultPage {
        results,
        cursor: None,
    }
}

pub fn search_results(data: SeriesListResponse) -> ResultPage {
    let results = data
        .data
        .into_iter()
        .map(|series| SearchManga {
            id: id::compose(series.id, &series.series_slug),
            title: series.title,
            cover: series.thumbnail,
        })
        .collect();

    ResultPage {
        results,
        cursor: data.meta,
    }
}

// Lazily loaded pages keep the real url in data-src until they scroll into
// view.
fn page_url(img: &Element) -> String {
    img.attr("src")
        .filter(|src| !src.is_empty())
        .or_else(|| img.attr("data-src"))
        .unwrap_or_default()
}

fn byline_author(byline: &str) -> String {
    AUTHOR_BYLINE
        .captures(byline)
        .and_then(|captures| captures.get(1))
        .map(|author| author.as_str().trim().to_owned())
        .unwrap_or_default()
}

fn select_first(doc: &Document, query: &str) -> Option<Element> {
    doc.select(query).into_iter().next()
}

fn first_text(doc: &Document, query: &str) -> String {
    select_first(doc, query)
        .and_then(|element| element.text())
        .unwrap_or_default()
}
