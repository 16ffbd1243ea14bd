use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Text shown for a book the reader has not rated
pub const UNRATED_MARKER: &str = "unrated";

/// Identifier of a book in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelf {
    pub shelf_name: String,
}

/// A reader's rating as displayed, e.g. `"4/5"`, or the unrated marker.
///
/// Only the textual form is kept; interpretation lives in
/// [`crate::services::rating`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(pub String);

impl Rating {
    pub fn unrated() -> Self {
        Self(UNRATED_MARKER.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::unrated()
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A book as supplied by the catalog owner. Read-only to the list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: BookId,
    pub title: String,
    pub author: Author,
    pub predefined_shelf: Shelf,
    #[serde(default, alias = "bookGenre")]
    pub genres: Vec<String>,
    #[serde(default)]
    pub rating: Rating,
}

impl BookRecord {
    /// Genre list in its display form, labels joined by a comma
    pub fn genre_label(&self) -> String {
        self.genres.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_record_deserializes_camel_case() {
        let json = r#"{
            "id": 7,
            "title": "Dune",
            "author": { "fullName": "Frank Herbert" },
            "predefinedShelf": { "shelfName": "Read" },
            "bookGenre": ["sci-fi", "classic"],
            "rating": "5/5"
        }"#;

        let book: BookRecord = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, BookId(7));
        assert_eq!(book.author.full_name, "Frank Herbert");
        assert_eq!(book.predefined_shelf.shelf_name, "Read");
        assert_eq!(book.genres, vec!["sci-fi", "classic"]);
        assert_eq!(book.rating.as_str(), "5/5");
    }

    #[test]
    fn test_missing_rating_defaults_to_unrated() {
        let json = r#"{
            "id": 1,
            "title": "Emma",
            "author": { "fullName": "Jane Austen" },
            "predefinedShelf": { "shelfName": "To Read" }
        }"#;

        let book: BookRecord = serde_json::from_str(json).unwrap();
        assert_eq!(book.rating, Rating::unrated());
        assert!(book.genres.is_empty());
    }

    #[test]
    fn test_genre_label_joins_with_comma() {
        let json = r#"{
            "id": 1,
            "title": "Emma",
            "author": { "fullName": "Jane Austen" },
            "predefinedShelf": { "shelfName": "To Read" },
            "genres": ["romance", "classic"]
        }"#;

        let book: BookRecord = serde_json::from_str(json).unwrap();
        assert_eq!(book.genre_label(), "romance,classic");
    }
}
