use serde::Serialize;

use crate::models::{BookId, BookRecord, SortColumn};
use crate::services::sort_config::SortConfig;
use crate::services::sorter::sort_records;
use crate::services::text_filter::filter_by_title;

/// Titles longer than this are cut short in the thumbnail placeholder
pub const THUMBNAIL_CHAR_LIMIT: usize = 40;

/// One displayed row of the book list
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookRow {
    pub id: BookId,
    /// Target of the row's link to the single-book view
    pub link: String,
    pub thumbnail: String,
    pub title: String,
    pub author: String,
    pub shelf: String,
    pub genre: String,
    pub rating: String,
}

impl BookRow {
    fn new(book: &BookRecord, overview_path: &str) -> Self {
        Self {
            id: book.id,
            link: overview_link(overview_path, book.id),
            thumbnail: thumbnail_label(&book.title),
            title: book.title.clone(),
            author: book.author.full_name.clone(),
            shelf: book.predefined_shelf.shelf_name.clone(),
            genre: book.genre_label(),
            rating: book.rating.to_string(),
        }
    }
}

/// A displayed, sortable list of books.
///
/// Holds its own snapshot of the catalog. A non-empty search text narrows
/// the snapshot once, when the list is opened. Sort state lives only as
/// long as the list does.
#[derive(Debug, Clone)]
pub struct BookList {
    books: Vec<BookRecord>,
    search_text: String,
    sort_config: SortConfig,
}

impl BookList {
    pub fn new(catalog: &[BookRecord], search_text: impl Into<String>) -> Self {
        let search_text = search_text.into();
        let books = if search_text.is_empty() {
            catalog.to_vec()
        } else {
            filter_by_title(catalog, &search_text)
                .into_iter()
                .cloned()
                .collect()
        };

        Self {
            books,
            search_text,
            sort_config: SortConfig::new(),
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort_config(&self) -> &SortConfig {
        &self.sort_config
    }

    /// Header click on `column`
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort_config.toggle(column);
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books in display order under the current sort
    pub fn sorted_books(&self) -> Vec<&BookRecord> {
        let mut ordered: Vec<&BookRecord> = self.books.iter().collect();
        sort_records(&mut ordered, self.sort_config.directives());
        ordered
    }

    pub fn rows(&self, overview_path: &str) -> Vec<BookRow> {
        self.sorted_books()
            .into_iter()
            .map(|book| BookRow::new(book, overview_path))
            .collect()
    }
}

/// Placeholder text for the thumbnail column
pub fn thumbnail_label(title: &str) -> String {
    if title.chars().count() > THUMBNAIL_CHAR_LIMIT {
        let truncated: String = title.chars().take(THUMBNAIL_CHAR_LIMIT).collect();
        format!("{}...", truncated)
    } else {
        title.to_string()
    }
}

pub fn overview_link(overview_path: &str, id: BookId) -> String {
    format!("{}/{}", overview_path.trim_end_matches('/'), id)
}
