use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Column of the book list that can drive a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Title,
    Author,
    Shelf,
    Genre,
    Rating,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Title,
        SortColumn::Author,
        SortColumn::Shelf,
        SortColumn::Genre,
        SortColumn::Rating,
    ];

    /// Resolves a column key as sent by a header click.
    ///
    /// Keys are matched case-insensitively. Anything unrecognised sorts like
    /// the title column.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "author" => SortColumn::Author,
            "shelf" => SortColumn::Shelf,
            "genre" => SortColumn::Genre,
            "rating" => SortColumn::Rating,
            _ => SortColumn::Title,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortColumn::Title => "title",
            SortColumn::Author => "author",
            SortColumn::Shelf => "shelf",
            SortColumn::Genre => "genre",
            SortColumn::Rating => "rating",
        }
    }
}

impl Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One active sort key: a column and its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    pub column: SortColumn,
    pub ascending: bool,
}

impl SortDirective {
    pub fn ascending(column: SortColumn) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    pub fn descending(column: SortColumn) -> Self {
        Self {
            column,
            ascending: false,
        }
    }
}

/// Arrow shown next to a column header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortIndicator {
    Up,
    Down,
}

impl From<bool> for SortIndicator {
    fn from(ascending: bool) -> Self {
        if ascending {
            SortIndicator::Up
        } else {
            SortIndicator::Down
        }
    }
}
