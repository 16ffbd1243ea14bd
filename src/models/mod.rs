mod book;
mod sorting;

pub use book::{Author, BookId, BookRecord, Rating, Shelf, UNRATED_MARKER};
pub use sorting::{SortColumn, SortDirective, SortIndicator};
