use serde::Deserialize;

use super::search_manga::SearchManga;

/// Continuation metadata as returned by the paginated API endpoints. A page
/// hands its cursor back verbatim to request the one after it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageCursor {
    pub current_page: u32,
    #[serde(default)]
    pub last_page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl PageCursor {
    /// The API reports `current_page == last_page` on the final page.
    pub fn exhausted(&self) -> bool {
        self.last_page.map_or(false, |last_page| last_page == self.current_page)
    }
}

/// One page of a paginated listing. `cursor` is `None` when the listing
/// cannot be continued.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultPage {
    pub results: Vec<SearchManga>,
    pub cursor: Option<PageCursor>,
}
