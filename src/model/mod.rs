mod api;
mod chapter;
mod home;
mod manga;
mod pagination;
mod search_manga;

pub use api::{BannerRecord, BannerSeries, ChapterListResponse, ChapterRecord, SeriesListResponse, SeriesRecord};
pub use chapter::{Chapter, ChapterDetails};
pub use home::{HomeSection, HomeSectionKind};
pub use manga::{Manga, Tag};
pub use pagination::{PageCursor, ResultPage};
pub use search_manga::SearchManga;
