pub mod book_list;
pub mod comparators;
pub mod rating;
pub mod recommender;
pub mod sort_config;
pub mod sorter;
pub mod text_filter;

pub use book_list::{BookList, BookRow};
pub use recommender::{ReadingHistory, Recommender};
pub use sort_config::SortConfig;
pub use sorter::{sort_books, sort_records};
pub use text_filter::filter_by_title;
