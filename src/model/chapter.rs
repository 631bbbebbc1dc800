#[derive(Debug, Clone)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    /// NaN when the chapter name carries no parsable number.
    pub number: f32,
    pub posted: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChapterDetails {
    pub id: String,
    pub manga_id: String,
    pub pages: Vec<String>,
}
