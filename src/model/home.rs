use super::search_manga::SearchManga;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSectionKind {
    Featured,
    SingleRowNormal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeSection {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: HomeSectionKind,
    /// Whether the section can be continued with a view more request.
    pub contains_more_items: bool,
    pub items: Vec<SearchManga>,
}
