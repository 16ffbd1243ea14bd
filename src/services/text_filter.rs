use crate::models::BookRecord;

/// Books whose title contains `query`, ignoring case. An empty query keeps
/// every book. Order is preserved.
pub fn filter_by_title<'a>(books: &'a [BookRecord], query: &str) -> Vec<&'a BookRecord> {
    if query.is_empty() {
        return books.iter().collect();
    }

    let needle = query.to_lowercase();
    books
        .iter()
        .filter(|book| book.title.to_lowercase().contains(&needle))
        .collect()
}
