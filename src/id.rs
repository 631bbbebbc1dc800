const SEPARATOR: &str = "$$";

/// Builds the composite `<series id>$$<slug>` manga id. The website routes
/// on slugs while the API routes on numeric series ids, so both travel
/// together in one token.
pub fn compose(series_id: i64, slug: &str) -> String {
    format!("{}{}{}", series_id, SEPARATOR, slug)
}

/// Numeric half of a composite id, or the whole token when it is not a
/// well-formed composite.
pub fn series_part(manga_id: &str) -> &str {
    split_exact(manga_id).map_or(manga_id, |(series_id, _)| series_id)
}

/// Slug half of a composite id, or the whole token when it is not a
/// well-formed composite.
pub fn slug_part(manga_id: &str) -> &str {
    split_exact(manga_id).map_or(manga_id, |(_, slug)| slug)
}

// Exactly one separator and two non-empty halves, anything else is treated
// as a bare token.
fn split_exact(manga_id: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = manga_id.split(SEPARATOR).collect();

    match parts[..] {
        [series_id, slug] if !series_id.is_empty() && !slug.is_empty() => Some((series_id, slug)),
        _ => None,
    }
}
