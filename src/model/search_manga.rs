#[derive(Debug, Clone, PartialEq)]
pub struct SearchManga {
    pub id: String,
    pub title: String,
    pub cover: String,
}
