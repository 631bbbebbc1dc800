#[derive(Debug, Clone, PartialEq)]
pub struct Manga {
    pub id: String,
    pub title: String,
    pub cover: String,
    pub author: String,
    pub artist: String,
    pub description: String,
    pub status: String,
    pub genres: Vec<Tag>,
}

/// The site only exposes genre labels, so the label doubles as the id.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: String,
    pub label: String,
}

impl Tag {
    pub fn new(label: String) -> Self {
        Self { id: label.clone(), label }
    }
}
